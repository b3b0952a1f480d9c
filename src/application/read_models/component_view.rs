//! Component view structs for read model
//!
//! These structs provide a flattened, query-optimized view of component data.

/// View representation of a software component
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentView {
    /// Stable identifier derived from the bom-ref (UUID v5)
    pub id: String,
    /// BOM reference identifier, unique within the document
    pub bom_ref: String,
    /// Component name
    pub name: String,
    /// Component version
    pub version: Option<String>,
    /// Package URL (purl), present when the ecosystem is known
    pub purl: Option<String>,
    /// Normalized ecosystem (purl type)
    pub ecosystem: Option<String>,
    /// License information, in inventory order
    pub licenses: Vec<LicenseView>,
    /// Paths where the component was found
    pub locations: Vec<String>,
    /// Component description
    pub description: Option<String>,
}

/// View representation of license information
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseView {
    /// SPDX license identifier, when the text is a bare identifier
    pub spdx_id: Option<String>,
    /// License text as discovered
    pub name: String,
}
