use crate::sbom_generation::domain::Component;

/// PurlBuilder service for deriving package URLs
///
/// Produces `pkg:<type>/<namespace>/<name>@<version>`. Each path segment
/// and the version are percent-encoded, so an npm scope such as
/// `@types/node` becomes `pkg:npm/%40types/node`.
pub struct PurlBuilder;

impl PurlBuilder {
    /// Builds the purl for a component, or `None` when its ecosystem is unknown
    pub fn build(component: &Component) -> Option<String> {
        let purl_type = Self::purl_type(component.ecosystem()?);

        let path = component
            .name()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        let mut purl = format!("pkg:{}/{}", purl_type, path);
        if let Some(version) = component.version() {
            purl.push('@');
            purl.push_str(&urlencoding::encode(version));
        }
        Some(purl)
    }

    /// Normalizes common ecosystem spellings to registered purl types
    pub fn purl_type(ecosystem: &str) -> &str {
        match ecosystem {
            "go" | "go-module" => "golang",
            "python" | "pip" => "pypi",
            "rust" | "crates" | "crates.io" => "cargo",
            "ruby" | "rubygems" => "gem",
            "node" | "nodejs" | "yarn" => "npm",
            "java" => "maven",
            other => other,
        }
    }
}
