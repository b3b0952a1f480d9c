/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with encoders, the file system and the console.
pub mod document_encoder;
pub mod formatter;
pub mod inventory_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use document_encoder::DocumentEncoder;
pub use formatter::SbomFormatter;
pub use inventory_reader::InventoryReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
