use crate::application::dto::FormatId;
use crate::sbom_generation::domain::ComponentInventory;
use crate::shared::error::FormatError;

/// DocumentEncoder port: turns (inventory, format identifier) into bytes
///
/// This is the seam a `FormattedReader` calls on its first read. The
/// production implementation is `FormatterFactory`; tests substitute
/// counting or failing encoders.
pub trait DocumentEncoder {
    /// Encodes the inventory in the schema named by `format`
    ///
    /// # Errors
    /// * `FormatError::UnsupportedFormat` - `format` names no known schema
    /// * `FormatError::Encoding` - the schema cannot represent the inventory
    fn encode(
        &self,
        inventory: &ComponentInventory,
        format: &FormatId,
    ) -> Result<Vec<u8>, FormatError>;
}

impl<E: DocumentEncoder + ?Sized> DocumentEncoder for &E {
    fn encode(
        &self,
        inventory: &ComponentInventory,
        format: &FormatId,
    ) -> Result<Vec<u8>, FormatError> {
        (**self).encode(inventory, format)
    }
}
