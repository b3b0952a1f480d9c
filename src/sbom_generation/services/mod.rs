mod purl_builder;
mod sbom_generator;

pub use purl_builder::PurlBuilder;
pub use sbom_generator::SbomGenerator;
