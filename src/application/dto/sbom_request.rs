use super::FormatId;
use std::path::PathBuf;

/// SbomRequest - Internal request DTO for the SBOM formatting use case
#[derive(Debug, Clone)]
pub struct SbomRequest {
    /// Path to the inventory JSON produced by the discovery step
    pub inventory_path: PathBuf,
    /// Requested output format, resolved lazily by the formatted reader
    pub format: FormatId,
}

impl SbomRequest {
    pub fn new(inventory_path: PathBuf, format: impl Into<FormatId>) -> Self {
        Self {
            inventory_path,
            format: format.into(),
        }
    }
}
