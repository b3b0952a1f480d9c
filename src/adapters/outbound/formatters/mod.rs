/// Formatter adapters, one per SBOM schema
mod cyclonedx_formatter;
mod spdx_formatter;
mod syft_formatter;

pub use cyclonedx_formatter::CycloneDxFormatter;
pub use spdx_formatter::SpdxFormatter;
pub use syft_formatter::SyftFormatter;
