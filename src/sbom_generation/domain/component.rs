use crate::shared::Result;

/// Maximum length for component names (security limit)
const MAX_COMPONENT_NAME_LENGTH: usize = 255;

/// Maximum length for component versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// NewType wrapper for component name with validation
///
/// Names come from many ecosystems (`@scope/pkg`, `github.com/x/y`,
/// `zope.interface`), so only emptiness, length and control characters
/// are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(name: String) -> Result<Self> {
        if name.trim().is_empty() {
            anyhow::bail!("Component name cannot be empty");
        }

        if name.len() > MAX_COMPONENT_NAME_LENGTH {
            anyhow::bail!(
                "Component name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_COMPONENT_NAME_LENGTH
            );
        }

        if name.chars().any(char::is_control) {
            anyhow::bail!("Component name contains control characters");
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for component version with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.is_empty() {
            anyhow::bail!("Component version cannot be empty");
        }

        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Component version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        if version
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            anyhow::bail!("Component version contains whitespace or control characters");
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Component value object: one discovered unit of software
///
/// Only the name is mandatory. Everything else depends on what the
/// discovery step could learn from the package metadata on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    name: ComponentName,
    version: Option<Version>,
    licenses: Vec<String>,
    ecosystem: Option<String>,
    locations: Vec<String>,
    description: Option<String>,
}

impl Component {
    pub fn new(name: String) -> Result<Self> {
        Ok(Self {
            name: ComponentName::new(name)?,
            version: None,
            licenses: Vec::new(),
            ecosystem: None,
            locations: Vec::new(),
            description: None,
        })
    }

    /// Set the version.
    pub fn with_version(mut self, version: String) -> Result<Self> {
        self.version = Some(Version::new(version)?);
        Ok(self)
    }

    /// Append a license identifier or expression. Blank entries are dropped.
    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        let license = license.into();
        if !license.trim().is_empty() {
            self.licenses.push(license.trim().to_string());
        }
        self
    }

    /// Set the package ecosystem (`npm`, `pypi`, `golang`, ...), stored lowercase.
    pub fn with_ecosystem(mut self, ecosystem: impl Into<String>) -> Self {
        let ecosystem = ecosystem.into().trim().to_lowercase();
        self.ecosystem = (!ecosystem.is_empty()).then_some(ecosystem);
        self
    }

    /// Append a path where the component was found.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.locations.push(location.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_ref().map(Version::as_str)
    }

    pub fn licenses(&self) -> &[String] {
        &self.licenses
    }

    pub fn ecosystem(&self) -> Option<&str> {
        self.ecosystem.as_deref()
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
