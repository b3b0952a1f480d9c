//! Lazy streaming of encoded SBOM documents

mod formatted_reader;

pub use formatted_reader::{FormattedReader, ReaderState};
