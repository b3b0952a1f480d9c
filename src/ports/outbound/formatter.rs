use crate::application::read_models::SbomReadModel;
use crate::shared::error::FormatError;

/// SbomFormatter port for encoding one SBOM schema
///
/// Each implementation owns its schema constants and shares no state with
/// the others. Output must be a pure function of the model.
pub trait SbomFormatter {
    /// Encodes the read model as a complete document
    ///
    /// # Arguments
    /// * `model` - The schema-neutral SBOM read model
    ///
    /// # Returns
    /// The encoded document bytes
    ///
    /// # Errors
    /// Returns `FormatError::Encoding` if the model cannot be represented
    fn format(&self, model: &SbomReadModel) -> Result<Vec<u8>, FormatError>;
}
