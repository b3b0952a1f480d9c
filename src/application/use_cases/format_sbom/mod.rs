use crate::application::dto::{SbomRequest, SbomResponse};
use crate::application::factories::FormatterFactory;
use crate::application::streaming::FormattedReader;
use crate::ports::outbound::{InventoryReader, OutputPresenter, ProgressReporter};
use crate::sbom_generation::domain::ComponentInventory;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::io::{self, Read};

/// FormatSbomUseCase - Core use case for SBOM formatting
///
/// Loads a component inventory, wraps it in a `FormattedReader` for the
/// requested format and lets the presenter pull the document. Nothing is
/// encoded until the presenter issues its first read, so an unknown
/// format surfaces from the presenter rather than from this method.
///
/// # Type Parameters
/// * `IR` - InventoryReader implementation
/// * `OP` - OutputPresenter implementation
/// * `PR` - ProgressReporter implementation
pub struct FormatSbomUseCase<IR, OP, PR> {
    inventory_reader: IR,
    output_presenter: OP,
    progress_reporter: PR,
}

impl<IR, OP, PR> FormatSbomUseCase<IR, OP, PR>
where
    IR: InventoryReader,
    OP: OutputPresenter,
    PR: ProgressReporter,
{
    /// Creates a new FormatSbomUseCase with injected dependencies
    pub fn new(inventory_reader: IR, output_presenter: OP, progress_reporter: PR) -> Self {
        Self {
            inventory_reader,
            output_presenter,
            progress_reporter,
        }
    }

    /// Executes the SBOM formatting use case
    ///
    /// # Arguments
    /// * `request` - Inventory location and requested format
    ///
    /// # Returns
    /// SbomResponse summarising what was written
    pub fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        let inventory = self.load_inventory(&request)?;

        // Only used for the progress line; the reader does its own resolution.
        if let Ok(format) = request.format.resolve() {
            self.progress_reporter
                .report(FormatterFactory::progress_message(format));
        }

        let mut reader = FormattedReader::new(&inventory, request.format.clone());
        let bytes_written = {
            let mut tracked = ProgressReader::new(&mut reader, &self.progress_reporter);
            self.output_presenter.present(&mut tracked)?
        };

        let format = reader.format().resolve().map_err(SbomError::from)?;
        self.progress_reporter.report_completion(&format!(
            "✅ Wrote {} component(s) as {} JSON ({} bytes)",
            inventory.len(),
            format.display_name(),
            bytes_written
        ));

        Ok(SbomResponse::new(format, inventory.len(), bytes_written))
    }

    fn load_inventory(&self, request: &SbomRequest) -> Result<ComponentInventory> {
        self.progress_reporter.report(&format!(
            "📖 Loading inventory from: {}",
            request.inventory_path.display()
        ));

        let inventory = self
            .inventory_reader
            .read_inventory(&request.inventory_path)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} component(s)", inventory.len()));
        self.progress_reporter.report_detail(&format!(
            "Source root: {} | requested format: {}",
            inventory.root(),
            request.format
        ));

        Ok(inventory)
    }
}

/// Forwards reads and reports the running byte count
struct ProgressReader<'r, R, PR> {
    inner: R,
    reporter: &'r PR,
    total: u64,
}

impl<'r, R: Read, PR: ProgressReporter> ProgressReader<'r, R, PR> {
    fn new(inner: R, reporter: &'r PR) -> Self {
        Self {
            inner,
            reporter,
            total: 0,
        }
    }
}

impl<R: Read, PR: ProgressReporter> Read for ProgressReader<'_, R, PR> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            self.total += n as u64;
            self.reporter.report_progress(self.total);
        }
        Ok(n)
    }
}
