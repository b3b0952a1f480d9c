use crate::shared::error::FormatError;

/// Output format enumeration for SBOM documents
///
/// The set is closed: every variant maps to exactly one formatter in
/// `FormatterFactory::create`, and the compiler checks that mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// CycloneDX 1.3 JSON
    CycloneDx,
    /// SPDX 2.2 JSON
    Spdx,
    /// Syft native JSON (schema 3.x)
    Syft,
}

impl OutputFormat {
    /// All supported formats, in documentation order
    pub const ALL: [OutputFormat; 3] = [OutputFormat::CycloneDx, OutputFormat::Spdx, OutputFormat::Syft];

    /// Canonical identifier, the document's media type
    pub fn media_type(self) -> &'static str {
        match self {
            OutputFormat::CycloneDx => "application/vnd.cyclonedx+json",
            OutputFormat::Spdx => "application/spdx+json",
            OutputFormat::Syft => "application/vnd.syft+json",
        }
    }

    /// Human-readable schema name used in messages
    pub fn display_name(self) -> &'static str {
        match self {
            OutputFormat::CycloneDx => "CycloneDX",
            OutputFormat::Spdx => "SPDX",
            OutputFormat::Syft => "Syft",
        }
    }

    /// File extension for the document; every schema is serialized as JSON
    pub fn file_extension(self) -> &'static str {
        "json"
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "application/vnd.cyclonedx+json" | "cyclonedx" | "cdx" => Ok(OutputFormat::CycloneDx),
            "application/spdx+json" | "spdx" => Ok(OutputFormat::Spdx),
            "application/vnd.syft+json" | "syft" => Ok(OutputFormat::Syft),
            _ => Err(FormatError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::CycloneDx => write!(f, "cyclonedx"),
            OutputFormat::Spdx => write!(f, "spdx"),
            OutputFormat::Syft => write!(f, "syft"),
        }
    }
}

/// Format identifier exactly as the caller supplied it
///
/// Unlike `OutputFormat` this may name a schema nobody knows about. It is
/// resolved lazily, so an unknown identifier surfaces as an error on the
/// first read of a formatted stream rather than at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatId(String);

impl FormatId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolves the identifier against the closed set of formats
    pub fn resolve(&self) -> Result<OutputFormat, FormatError> {
        self.0.parse()
    }
}

impl From<OutputFormat> for FormatId {
    fn from(format: OutputFormat) -> Self {
        Self(format.media_type().to_string())
    }
}

impl From<&str> for FormatId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for FormatId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for FormatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_media_type() {
        for format in OutputFormat::ALL {
            assert_eq!(OutputFormat::from_str(format.media_type()).unwrap(), format);
        }
    }

    #[test]
    fn test_output_format_from_short_names() {
        assert_eq!(OutputFormat::from_str("cyclonedx").unwrap(), OutputFormat::CycloneDx);
        assert_eq!(OutputFormat::from_str("cdx").unwrap(), OutputFormat::CycloneDx);
        assert_eq!(OutputFormat::from_str("spdx").unwrap(), OutputFormat::Spdx);
        assert_eq!(OutputFormat::from_str("syft").unwrap(), OutputFormat::Syft);
    }

    #[test]
    fn test_output_format_case_insensitive() {
        assert_eq!(OutputFormat::from_str("CycloneDX").unwrap(), OutputFormat::CycloneDx);
        assert_eq!(OutputFormat::from_str("SPDX").unwrap(), OutputFormat::Spdx);
        assert_eq!(
            OutputFormat::from_str("Application/Vnd.Syft+JSON").unwrap(),
            OutputFormat::Syft
        );
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let error = OutputFormat::from_str("unknown-format").unwrap_err();
        assert_eq!(
            error,
            FormatError::UnsupportedFormat("unknown-format".to_string())
        );
        assert_eq!(error.to_string(), "unsupported format \"unknown-format\"");
    }

    #[test]
    fn test_output_format_from_str_empty() {
        assert!(OutputFormat::from_str("").is_err());
    }

    #[test]
    fn test_output_format_display_round_trips() {
        for format in OutputFormat::ALL {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }

    #[test]
    fn test_output_format_file_extension() {
        assert_eq!(OutputFormat::CycloneDx.file_extension(), "json");
        assert_eq!(OutputFormat::Spdx.file_extension(), "json");
        assert_eq!(OutputFormat::Syft.file_extension(), "json");
    }

    #[test]
    fn test_format_id_from_output_format_uses_media_type() {
        let id = FormatId::from(OutputFormat::Spdx);
        assert_eq!(id.as_str(), "application/spdx+json");
        assert_eq!(id.resolve().unwrap(), OutputFormat::Spdx);
    }

    #[test]
    fn test_format_id_keeps_unknown_text_verbatim() {
        let id = FormatId::from("Weird Format");
        assert_eq!(id.to_string(), "Weird Format");
        assert_eq!(
            id.resolve().unwrap_err(),
            FormatError::UnsupportedFormat("Weird Format".to_string())
        );
    }
}
