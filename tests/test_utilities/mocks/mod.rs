/// Mock implementations for testing
mod mock_document_encoder;
mod mock_inventory_reader;
mod mock_output_presenter;
mod mock_progress_reporter;

#[allow(unused_imports)]
pub use mock_document_encoder::CountingEncoder;
#[allow(unused_imports)]
pub use mock_inventory_reader::{sample_inventory, MockInventoryReader, SAMPLE_COMPONENTS};
#[allow(unused_imports)]
pub use mock_output_presenter::MockOutputPresenter;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
