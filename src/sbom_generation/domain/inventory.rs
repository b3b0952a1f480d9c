use super::{Component, SbomMetadata};

/// ComponentInventory aggregate: everything discovered under one scan root
///
/// Component order is the order of discovery and is preserved verbatim by
/// every output format. Duplicates are kept. The inventory is read-only once
/// built, so a single instance can back any number of formatted readers.
#[derive(Debug, Clone)]
pub struct ComponentInventory {
    root: String,
    components: Vec<Component>,
    metadata: SbomMetadata,
}

impl ComponentInventory {
    pub fn new(root: impl Into<String>, components: Vec<Component>, metadata: SbomMetadata) -> Self {
        Self {
            root: root.into(),
            components,
            metadata,
        }
    }

    /// Path or logical identifier of what was scanned
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn metadata(&self) -> &SbomMetadata {
        &self.metadata
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> SbomMetadata {
        SbomMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "sbom-formatter".to_string(),
            "0.1.0".to_string(),
            "urn:uuid:00000000-0000-4000-8000-000000000000".to_string(),
        )
    }

    #[test]
    fn test_inventory_preserves_order_and_duplicates() {
        let names = ["pump", "once", "pump"];
        let components = names
            .iter()
            .map(|n| Component::new(n.to_string()).unwrap())
            .collect();

        let inventory = ComponentInventory::new("testdata/", components, metadata());

        assert_eq!(inventory.root(), "testdata/");
        assert_eq!(inventory.len(), 3);
        let actual: Vec<&str> = inventory.components().iter().map(|c| c.name()).collect();
        assert_eq!(actual, names);
    }

    #[test]
    fn test_inventory_empty() {
        let inventory = ComponentInventory::new("", vec![], metadata());
        assert!(inventory.is_empty());
        assert_eq!(inventory.metadata().tool_name(), "sbom-formatter");
    }
}
