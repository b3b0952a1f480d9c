/// SbomMetadata value object: document-level facts fixed at inventory time
///
/// Timestamp and serial number are captured once, upstream of any encoder,
/// so re-encoding the same inventory yields identical bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    serial_number: String,
}

impl SbomMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        serial_number: String,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            serial_number,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// Serial number without its `urn:uuid:` prefix
    pub fn document_id(&self) -> &str {
        self.serial_number
            .strip_prefix("urn:uuid:")
            .unwrap_or(&self.serial_number)
    }
}
