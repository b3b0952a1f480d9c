use crate::ports::outbound::InventoryReader;
use crate::sbom_generation::domain::{Component, ComponentInventory, SbomMetadata};
use crate::sbom_generation::services::SbomGenerator;
use crate::shared::error::SbomError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk shape of an inventory handed over by the discovery step
#[derive(Debug, Deserialize)]
struct InventoryDocument {
    root: String,
    #[serde(default)]
    metadata: Option<MetadataDocument>,
    #[serde(default)]
    components: Vec<ComponentDocument>,
}

#[derive(Debug, Deserialize)]
struct MetadataDocument {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    serial_number: String,
}

#[derive(Debug, Deserialize)]
struct ComponentDocument {
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    licenses: Vec<String>,
    #[serde(default)]
    ecosystem: Option<String>,
    #[serde(default)]
    locations: Vec<String>,
    #[serde(default)]
    description: Option<String>,
}

impl ComponentDocument {
    fn into_component(self) -> Result<Component> {
        let mut component = Component::new(self.name)?;
        if let Some(version) = self.version {
            component = component.with_version(version)?;
        }
        if let Some(ecosystem) = self.ecosystem {
            component = component.with_ecosystem(ecosystem);
        }
        for license in self.licenses {
            component = component.with_license(license);
        }
        for location in self.locations {
            component = component.with_location(location);
        }
        if let Some(description) = self.description {
            component = component.with_description(description);
        }
        Ok(component)
    }
}

/// FileSystemReader adapter for reading inventories from the file system
///
/// This adapter implements the InventoryReader port. Inventories without
/// a metadata block get fresh metadata from `SbomGenerator`.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        validate_regular_file(path, file_type)?;

        let metadata = fs::metadata(path).map_err(|e| SbomError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            SbomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn parse_inventory(&self, path: &Path, content: &str) -> Result<ComponentInventory> {
        let document: InventoryDocument =
            serde_json::from_str(content).map_err(|e| SbomError::InventoryParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let components = document
            .components
            .into_iter()
            .enumerate()
            .map(|(index, doc)| {
                doc.into_component().map_err(|e| {
                    SbomError::InvalidInventory {
                        index,
                        reason: e.to_string(),
                    }
                    .into()
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let metadata = match document.metadata {
            Some(m) => SbomMetadata::new(m.timestamp, m.tool_name, m.tool_version, m.serial_number),
            None => SbomGenerator::generate_default_metadata(),
        };

        Ok(ComponentInventory::new(document.root, components, metadata))
    }
}

impl InventoryReader for FileSystemReader {
    fn read_inventory(&self, path: &Path) -> Result<ComponentInventory> {
        if !path.exists() {
            return Err(SbomError::InventoryNotFound {
                path: path.to_path_buf(),
                suggestion: "Please check the path passed with --inventory, or run the discovery step first.".to_string(),
            }
            .into());
        }

        let content = self.safe_read_file(path, "inventory file")?;
        self.parse_inventory(path, &content)
    }
}
