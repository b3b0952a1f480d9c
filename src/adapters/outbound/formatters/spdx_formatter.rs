use crate::application::read_models::{ComponentView, LicenseView, SbomReadModel};
use crate::ports::outbound::SbomFormatter;
use crate::shared::error::FormatError;
use serde::Serialize;

const SPDX_VERSION: &str = "SPDX-2.2";
const DATA_LICENSE: &str = "CC0-1.0";
const DOCUMENT_SPDX_ID: &str = "SPDXRef-DOCUMENT";
const NO_ASSERTION: &str = "NOASSERTION";

/// SPDX 2.2 document structure.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpdxDocument {
    spdx_version: &'static str,
    data_license: &'static str,
    #[serde(rename = "SPDXID")]
    spdx_id: &'static str,
    name: String,
    document_namespace: String,
    creation_info: CreationInfo,
    packages: Vec<SpdxPackage>,
    relationships: Vec<Relationship>,
}

#[derive(Debug, Serialize)]
struct CreationInfo {
    created: String,
    creators: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpdxPackage {
    #[serde(rename = "SPDXID")]
    spdx_id: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_info: Option<String>,
    download_location: &'static str,
    files_analyzed: bool,
    license_concluded: String,
    license_declared: String,
    copyright_text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_info: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    external_refs: Vec<ExternalRef>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExternalRef {
    reference_category: &'static str,
    reference_type: &'static str,
    reference_locator: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Relationship {
    spdx_element_id: &'static str,
    relationship_type: &'static str,
    related_spdx_element: String,
}

/// SpdxFormatter adapter for generating SPDX 2.2 JSON format
pub struct SpdxFormatter;

impl SpdxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpdxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SpdxFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<Vec<u8>, FormatError> {
        let packages: Vec<SpdxPackage> = model
            .components
            .iter()
            .enumerate()
            .map(|(position, c)| self.build_package(c, position))
            .collect();

        let relationships = packages
            .iter()
            .map(|p| Relationship {
                spdx_element_id: DOCUMENT_SPDX_ID,
                relationship_type: "DESCRIBES",
                related_spdx_element: p.spdx_id.clone(),
            })
            .collect();

        let metadata = &model.metadata;
        let document = SpdxDocument {
            spdx_version: SPDX_VERSION,
            data_license: DATA_LICENSE,
            spdx_id: DOCUMENT_SPDX_ID,
            name: model.source.root.clone(),
            document_namespace: format!(
                "https://spdx.org/spdxdocs/{}-{}",
                metadata.tool_name, metadata.document_id
            ),
            creation_info: CreationInfo {
                created: metadata.timestamp.clone(),
                creators: vec![format!(
                    "Tool: {}-{}",
                    metadata.tool_name, metadata.tool_version
                )],
            },
            packages,
            relationships,
        };

        let mut bytes = serde_json::to_vec_pretty(&document)
            .map_err(|e| FormatError::encoding("SPDX", e))?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

impl SpdxFormatter {
    /// Create an SPDX package from a component view.
    fn build_package(&self, component: &ComponentView, position: usize) -> SpdxPackage {
        let external_refs = component
            .purl
            .iter()
            .map(|purl| ExternalRef {
                reference_category: "PACKAGE-MANAGER",
                reference_type: "purl",
                reference_locator: purl.clone(),
            })
            .collect();

        let source_info = (!component.locations.is_empty()).then(|| {
            format!(
                "acquired package info from: {}",
                component.locations.join(", ")
            )
        });

        let license = license_expression(&component.licenses);

        SpdxPackage {
            spdx_id: format!(
                "SPDXRef-Package-{}-{}",
                position,
                sanitize_id(&component.name)
            ),
            name: component.name.clone(),
            version_info: component.version.clone(),
            download_location: NO_ASSERTION,
            files_analyzed: false,
            license_concluded: license.clone(),
            license_declared: license,
            copyright_text: NO_ASSERTION,
            description: component.description.clone(),
            source_info,
            external_refs,
        }
    }
}

/// Joins licenses into one expression; free text becomes a `LicenseRef-`.
fn license_expression(licenses: &[LicenseView]) -> String {
    if licenses.is_empty() {
        return NO_ASSERTION.to_string();
    }

    licenses
        .iter()
        .map(|l| match &l.spdx_id {
            Some(id) => id.clone(),
            None => format!("LicenseRef-{}", sanitize_id(&l.name)),
        })
        .collect::<Vec<_>>()
        .join(" AND ")
}

/// SPDX identifiers allow only letters, digits, `.` and `-`.
fn sanitize_id(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
