mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, merge_config, ConfigFile};
use owo_colors::OwoColorize;
use sbom_formatter::adapters::outbound::console::StderrProgressReporter;
use sbom_formatter::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use sbom_formatter::application::dto::SbomRequest;
use sbom_formatter::application::use_cases::FormatSbomUseCase;
use sbom_formatter::ports::outbound::OutputPresenter;
use sbom_formatter::shared::error::ExitCode;
use sbom_formatter::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    // clap exits on its own: 2 for bad arguments, 0 for --help/--version
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\n{} {}", "Caused by:".yellow(), cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let options = merge_config(&args, config.as_ref());

    let progress_reporter = StderrProgressReporter::new(options.verbose);
    let presenter: Box<dyn OutputPresenter> = match options.output {
        Some(ref path) => Box::new(FileSystemWriter::new(path.clone())),
        None => Box::new(StdoutPresenter::new()),
    };

    let use_case = FormatSbomUseCase::new(FileSystemReader::new(), presenter, progress_reporter);
    let request = SbomRequest::new(args.inventory.clone(), options.format);

    use_case.execute(request)?;

    Ok(())
}

/// Loads the explicit config, or looks for one next to the inventory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(ref path) = args.config {
        return load_config_from_path(path).map(Some);
    }

    let dir = args
        .inventory
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    Ok(discover_config(dir)?.map(|(path, config)| {
        eprintln!("🔧 Auto-discovered config file: {}", path.display());
        config
    }))
}
