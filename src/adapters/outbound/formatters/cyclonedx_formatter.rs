use crate::application::read_models::{
    ComponentView, LicenseView, SbomMetadataView, SbomReadModel, SourceView,
};
use crate::ports::outbound::SbomFormatter;
use crate::shared::error::FormatError;
use serde::Serialize;

const BOM_FORMAT: &str = "CycloneDX";
const SPEC_VERSION: &str = "1.3";

#[derive(Debug, Serialize)]
struct Bom {
    #[serde(rename = "bomFormat")]
    bom_format: &'static str,
    #[serde(rename = "specVersion")]
    spec_version: &'static str,
    #[serde(rename = "serialNumber")]
    serial_number: String,
    version: u32,
    metadata: Metadata,
    components: Vec<Component>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Vec<Tool>,
    component: Component,
}

#[derive(Debug, Serialize)]
struct Tool {
    vendor: String,
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "bom-ref", skip_serializing_if = "Option::is_none")]
    bom_ref: Option<String>,
    #[serde(rename = "type")]
    component_type: &'static str,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    licenses: Vec<License>,
    #[serde(skip_serializing_if = "Option::is_none")]
    purl: Option<String>,
}

#[derive(Debug, Serialize)]
struct License {
    license: LicenseContent,
}

/// CycloneDX 1.3 allows either an SPDX id or a free-form name, not both
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum LicenseContent {
    Id { id: String },
    Name { name: String },
}

/// CycloneDxFormatter adapter for generating CycloneDX 1.3 JSON format
///
/// This adapter implements the SbomFormatter port for CycloneDX format.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for CycloneDxFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<Vec<u8>, FormatError> {
        let bom = Bom {
            bom_format: BOM_FORMAT,
            spec_version: SPEC_VERSION,
            serial_number: model.metadata.serial_number.clone(),
            version: 1,
            metadata: self.build_metadata(&model.metadata, &model.source),
            components: self.build_components(&model.components),
        };

        let mut document = serde_json::to_vec_pretty(&bom)
            .map_err(|e| FormatError::encoding(BOM_FORMAT, e))?;
        document.push(b'\n');
        Ok(document)
    }
}

impl CycloneDxFormatter {
    /// Build metadata; the scanned root is described as a `file` component
    fn build_metadata(&self, metadata: &SbomMetadataView, source: &SourceView) -> Metadata {
        Metadata {
            timestamp: metadata.timestamp.clone(),
            tools: vec![Tool {
                vendor: metadata.tool_name.clone(),
                name: metadata.tool_name.clone(),
                version: metadata.tool_version.clone(),
            }],
            component: Component {
                bom_ref: None,
                component_type: "file",
                name: source.root.clone(),
                version: None,
                description: None,
                licenses: Vec::new(),
                purl: None,
            },
        }
    }

    /// Build components from ComponentView slice
    fn build_components(&self, components: &[ComponentView]) -> Vec<Component> {
        components
            .iter()
            .map(|c| Component {
                bom_ref: Some(c.bom_ref.clone()),
                component_type: "library",
                name: c.name.clone(),
                version: c.version.clone(),
                description: c.description.clone(),
                licenses: c.licenses.iter().map(|l| self.build_license(l)).collect(),
                purl: c.purl.clone(),
            })
            .collect()
    }

    fn build_license(&self, license: &LicenseView) -> License {
        let content = match &license.spdx_id {
            Some(id) => LicenseContent::Id { id: id.clone() },
            None => LicenseContent::Name {
                name: license.name.clone(),
            },
        };
        License { license: content }
    }
}
