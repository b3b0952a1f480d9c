use crate::adapters::outbound::formatters::{CycloneDxFormatter, SpdxFormatter, SyftFormatter};
use crate::application::dto::{FormatId, OutputFormat};
use crate::application::read_models::SbomReadModelBuilder;
use crate::ports::outbound::{DocumentEncoder, SbomFormatter};
use crate::sbom_generation::domain::ComponentInventory;
use crate::shared::error::FormatError;

/// Factory for creating SBOM formatters
///
/// This factory is the format selector: it maps the closed set of output
/// formats to their formatter adapters, and as a `DocumentEncoder` it
/// resolves a raw identifier and encodes an inventory in one step.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use sbom_formatter::application::dto::OutputFormat;
    /// use sbom_formatter::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Spdx);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn SbomFormatter> {
        match format {
            OutputFormat::CycloneDx => Box::new(CycloneDxFormatter::new()),
            OutputFormat::Spdx => Box::new(SpdxFormatter::new()),
            OutputFormat::Syft => Box::new(SyftFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use sbom_formatter::application::dto::OutputFormat;
    /// use sbom_formatter::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::CycloneDx);
    /// assert_eq!(message, "📝 Generating CycloneDX JSON format output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::CycloneDx => "📝 Generating CycloneDX JSON format output...",
            OutputFormat::Spdx => "📝 Generating SPDX JSON format output...",
            OutputFormat::Syft => "📝 Generating Syft JSON format output...",
        }
    }
}

impl DocumentEncoder for FormatterFactory {
    fn encode(
        &self,
        inventory: &ComponentInventory,
        format: &FormatId,
    ) -> Result<Vec<u8>, FormatError> {
        let format = format.resolve()?;
        let model = SbomReadModelBuilder::build(inventory);
        Self::create(format).format(&model)
    }
}
