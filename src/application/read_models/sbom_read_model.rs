//! SBOM read model for query operations
//!
//! This module provides the main read model struct that aggregates
//! all SBOM data in a query-optimized format.

use super::component_view::ComponentView;

/// Main read model for SBOM data
///
/// Schema-neutral: every formatter consumes the same model and only
/// decides how to lay it out.
#[derive(Debug, Clone, PartialEq)]
pub struct SbomReadModel {
    /// SBOM metadata
    pub metadata: SbomMetadataView,
    /// What was scanned
    pub source: SourceView,
    /// List of components, in inventory order
    pub components: Vec<ComponentView>,
}

/// View representation of SBOM metadata
#[derive(Debug, Clone, PartialEq)]
pub struct SbomMetadataView {
    /// Timestamp when the SBOM was created
    pub timestamp: String,
    /// Name of the tool that generated the SBOM
    pub tool_name: String,
    /// Version of the tool
    pub tool_version: String,
    /// Serial number of the SBOM (`urn:uuid:...`)
    pub serial_number: String,
    /// Serial number without the URN prefix
    pub document_id: String,
}

/// View representation of the scanned root
#[derive(Debug, Clone, PartialEq)]
pub struct SourceView {
    /// Path or logical identifier of the scan root
    pub root: String,
}
