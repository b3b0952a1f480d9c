//! sbom-formatter - lazy multi-format SBOM serialization
//!
//! This library turns a discovered component inventory into a Software Bill
//! of Materials in one of several JSON schemas (CycloneDX, SPDX, Syft) and
//! exposes the document as a lazily encoded byte stream, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Components, inventories and metadata
//! - **Application Layer** (`application`): Format selection, streaming and use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_formatter::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = FormatSbomUseCase::new(
//!     FileSystemReader::new(),
//!     StdoutPresenter::new(),
//!     StderrProgressReporter::new(false),
//! );
//!
//! let request = SbomRequest::new(PathBuf::from("inventory.json"), OutputFormat::Spdx);
//! let response = use_case.execute(request)?;
//! eprintln!("{} bytes written", response.bytes_written);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        CycloneDxFormatter, SpdxFormatter, SyftFormatter,
    };
    pub use crate::application::dto::{FormatId, OutputFormat, SbomRequest, SbomResponse};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::read_models::{SbomReadModel, SbomReadModelBuilder};
    pub use crate::application::streaming::{FormattedReader, ReaderState};
    pub use crate::application::use_cases::FormatSbomUseCase;
    pub use crate::ports::outbound::{
        DocumentEncoder, InventoryReader, OutputPresenter, ProgressReporter, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        Component, ComponentInventory, ComponentName, SbomMetadata, Version,
    };
    pub use crate::sbom_generation::services::{PurlBuilder, SbomGenerator};
    pub use crate::shared::error::{FormatError, SbomError};
    pub use crate::shared::Result;
}
