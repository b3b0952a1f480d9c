//! Builder for constructing SbomReadModel from domain objects
//!
//! This module provides the builder that transforms domain objects into
//! the query-optimized read model.

use super::component_view::{ComponentView, LicenseView};
use super::sbom_read_model::{SbomMetadataView, SbomReadModel, SourceView};
use crate::sbom_generation::domain::{Component, ComponentInventory, SbomMetadata};
use crate::sbom_generation::services::PurlBuilder;
use std::collections::HashSet;
use uuid::Uuid;

/// Builder for constructing SbomReadModel from a component inventory
///
/// Derives purls, bom-refs and stable ids once so that every formatter
/// agrees on them. Pure: the same inventory always yields the same model.
pub struct SbomReadModelBuilder;

impl SbomReadModelBuilder {
    /// Builds a SbomReadModel from an inventory
    pub fn build(inventory: &ComponentInventory) -> SbomReadModel {
        SbomReadModel {
            metadata: Self::build_metadata(inventory.metadata()),
            source: SourceView {
                root: inventory.root().to_string(),
            },
            components: Self::build_components(inventory.components()),
        }
    }

    /// Converts domain metadata to view representation
    fn build_metadata(metadata: &SbomMetadata) -> SbomMetadataView {
        SbomMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            serial_number: metadata.serial_number().to_string(),
            document_id: metadata.document_id().to_string(),
        }
    }

    /// Converts components to views, keeping order and duplicates
    ///
    /// The bom-ref is the purl when one exists, otherwise `name@version`.
    /// A repeated bom-ref gets a `#<position>` suffix, with a further
    /// `-<n>` counter if that is taken too. The id hashes the bom-ref
    /// together with the position.
    fn build_components(components: &[Component]) -> Vec<ComponentView> {
        let mut seen_refs = HashSet::new();

        components
            .iter()
            .enumerate()
            .map(|(position, component)| {
                let purl = PurlBuilder::build(component);

                let base_ref = purl.clone().unwrap_or_else(|| match component.version() {
                    Some(version) => format!("{}@{}", component.name(), version),
                    None => component.name().to_string(),
                });
                let bom_ref = Self::unique_ref(&mut seen_refs, base_ref, position);
                let id_input = format!("{}#{}", bom_ref, position);

                ComponentView {
                    id: Uuid::new_v5(&Uuid::NAMESPACE_URL, id_input.as_bytes()).to_string(),
                    bom_ref,
                    name: component.name().to_string(),
                    version: component.version().map(str::to_string),
                    purl,
                    ecosystem: component
                        .ecosystem()
                        .map(|e| PurlBuilder::purl_type(e).to_string()),
                    licenses: component
                        .licenses()
                        .iter()
                        .map(|l| Self::build_license(l))
                        .collect(),
                    locations: component.locations().to_vec(),
                    description: component.description().map(str::to_string),
                }
            })
            .collect()
    }

    /// Claims `base` or the first free `#<position>` variant of it
    fn unique_ref(seen_refs: &mut HashSet<String>, base: String, position: usize) -> String {
        if seen_refs.insert(base.clone()) {
            return base;
        }

        let mut candidate = format!("{}#{}", base, position);
        let mut counter = 1;
        while !seen_refs.insert(candidate.clone()) {
            candidate = format!("{}#{}-{}", base, position, counter);
            counter += 1;
        }
        candidate
    }

    /// A license string counts as an SPDX identifier when it is a single
    /// token of letters, digits, `.`, `-` and `+`.
    fn build_license(license: &str) -> LicenseView {
        let is_identifier = license
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+'));

        LicenseView {
            spdx_id: is_identifier.then(|| license.to_string()),
            name: license.to_string(),
        }
    }
}
