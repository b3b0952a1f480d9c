use sbom_formatter::prelude::*;
use std::path::Path;

/// The npm packages found under `testdata/` by the discovery step
pub const SAMPLE_COMPONENTS: [(&str, &str); 6] = [
    ("collapse-white-space", "1.0.6"),
    ("end-of-stream", "1.4.4"),
    ("insert-css", "2.0.0"),
    ("once", "1.4.0"),
    ("pump", "3.0.0"),
    ("wrappy", "1.0.2"),
];

/// Builds the sample inventory with fixed metadata
pub fn sample_inventory() -> ComponentInventory {
    let components = SAMPLE_COMPONENTS
        .iter()
        .map(|(name, version)| {
            Component::new(name.to_string())
                .unwrap()
                .with_version(version.to_string())
                .unwrap()
                .with_ecosystem("npm")
                .with_license("MIT")
                .with_location(format!("node_modules/{}/package.json", name))
        })
        .collect();

    ComponentInventory::new(
        "testdata/",
        components,
        SbomMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "sbom-formatter".to_string(),
            "1.0.0".to_string(),
            "urn:uuid:6a1e4c0e-7f3b-4a52-9a57-2b1c8d0e9f10".to_string(),
        ),
    )
}

/// Mock InventoryReader for testing
pub struct MockInventoryReader {
    pub inventory: Option<ComponentInventory>,
}

impl MockInventoryReader {
    pub fn new(inventory: ComponentInventory) -> Self {
        Self {
            inventory: Some(inventory),
        }
    }

    pub fn with_failure() -> Self {
        Self { inventory: None }
    }
}

impl InventoryReader for MockInventoryReader {
    fn read_inventory(&self, path: &Path) -> Result<ComponentInventory> {
        match &self.inventory {
            Some(inventory) => Ok(inventory.clone()),
            None => Err(SbomError::InventoryNotFound {
                path: path.to_path_buf(),
                suggestion: "Mock inventory reader failure".to_string(),
            }
            .into()),
        }
    }
}
