use crate::application::read_models::{ComponentView, SbomReadModel};
use crate::ports::outbound::SbomFormatter;
use crate::shared::error::FormatError;
use serde::Serialize;

const SCHEMA_VERSION: &str = "3.3.2";
const SCHEMA_URL: &str =
    "https://raw.githubusercontent.com/anchore/syft/main/schema/json/schema-3.3.2.json";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SyftDocument {
    artifacts: Vec<Artifact>,
    artifact_relationships: Vec<ArtifactRelationship>,
    source: Source,
    distro: Distro,
    descriptor: Descriptor,
    schema: Schema,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Artifact {
    id: String,
    name: String,
    /// Syft always writes a version, empty when unknown
    version: String,
    #[serde(rename = "type")]
    package_type: &'static str,
    found_by: String,
    locations: Vec<Location>,
    licenses: Vec<String>,
    language: &'static str,
    cpes: Vec<String>,
    purl: String,
}

#[derive(Debug, Serialize)]
struct Location {
    path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactRelationship {
    parent: String,
    child: String,
    #[serde(rename = "type")]
    relationship_type: String,
}

#[derive(Debug, Serialize)]
struct Source {
    #[serde(rename = "type")]
    source_type: &'static str,
    target: String,
}

/// Directory scans carry no distribution information
#[derive(Debug, Serialize)]
struct Distro {}

#[derive(Debug, Serialize)]
struct Descriptor {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct Schema {
    version: &'static str,
    url: &'static str,
}

/// SyftFormatter adapter for generating Syft native JSON (schema 3.x)
pub struct SyftFormatter;

impl SyftFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SyftFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomFormatter for SyftFormatter {
    fn format(&self, model: &SbomReadModel) -> Result<Vec<u8>, FormatError> {
        let found_by = format!("{}-cataloger", model.metadata.tool_name);

        let document = SyftDocument {
            artifacts: model
                .components
                .iter()
                .map(|c| self.build_artifact(c, &found_by))
                .collect(),
            artifact_relationships: Vec::new(),
            source: Source {
                source_type: "directory",
                target: model.source.root.clone(),
            },
            distro: Distro {},
            descriptor: Descriptor {
                name: model.metadata.tool_name.clone(),
                version: model.metadata.tool_version.clone(),
            },
            schema: Schema {
                version: SCHEMA_VERSION,
                url: SCHEMA_URL,
            },
        };

        let mut bytes = serde_json::to_vec_pretty(&document)
            .map_err(|e| FormatError::encoding("Syft", e))?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}

impl SyftFormatter {
    fn build_artifact(&self, component: &ComponentView, found_by: &str) -> Artifact {
        let ecosystem = component.ecosystem.as_deref();

        Artifact {
            id: component.id.clone(),
            name: component.name.clone(),
            version: component.version.clone().unwrap_or_default(),
            package_type: package_type(ecosystem),
            found_by: found_by.to_string(),
            locations: component
                .locations
                .iter()
                .map(|path| Location { path: path.clone() })
                .collect(),
            licenses: component.licenses.iter().map(|l| l.name.clone()).collect(),
            language: language(ecosystem),
            cpes: Vec::new(),
            purl: component.purl.clone().unwrap_or_default(),
        }
    }
}

/// Maps a purl type to Syft's package type
fn package_type(ecosystem: Option<&str>) -> &'static str {
    match ecosystem {
        Some("npm") => "npm",
        Some("pypi") => "python",
        Some("golang") => "go-module",
        Some("cargo") => "rust-crate",
        Some("gem") => "gem",
        Some("maven") => "java-archive",
        Some("nuget") => "dotnet",
        Some("composer") => "php-composer",
        _ => "UnknownPackage",
    }
}

fn language(ecosystem: Option<&str>) -> &'static str {
    match ecosystem {
        Some("npm") => "javascript",
        Some("pypi") => "python",
        Some("golang") => "go",
        Some("cargo") => "rust",
        Some("gem") => "ruby",
        Some("maven") => "java",
        Some("nuget") => "dotnet",
        Some("composer") => "php",
        _ => "",
    }
}
