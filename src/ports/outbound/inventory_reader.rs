use crate::sbom_generation::domain::ComponentInventory;
use crate::shared::Result;
use std::path::Path;

/// InventoryReader port for loading the component inventory
///
/// Discovery happens elsewhere; this port only hands its result over.
pub trait InventoryReader {
    /// Loads the inventory stored at `path`
    ///
    /// # Errors
    /// Returns an error if the file is missing, unsafe to read, malformed,
    /// or contains invalid components
    fn read_inventory(&self, path: &Path) -> Result<ComponentInventory>;
}
