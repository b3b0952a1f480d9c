use super::OutputFormat;

/// SbomResponse - Summary of a completed formatting run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomResponse {
    /// Format the document was written in
    pub format: OutputFormat,
    /// Number of components carried into the document
    pub component_count: usize,
    /// Bytes handed to the output presenter
    pub bytes_written: u64,
}

impl SbomResponse {
    pub fn new(format: OutputFormat, component_count: usize, bytes_written: u64) -> Self {
        Self {
            format,
            component_count,
            bytes_written,
        }
    }
}
