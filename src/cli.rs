use clap::Parser;
use std::path::PathBuf;

/// Format a component inventory as a CycloneDX, SPDX or Syft SBOM
#[derive(Parser, Debug)]
#[command(name = "sbom-formatter")]
#[command(version)]
#[command(
    about = "Format a component inventory as a CycloneDX, SPDX or Syft SBOM",
    long_about = None
)]
pub struct Args {
    /// Path to the inventory JSON produced by the discovery step
    #[arg(short, long, value_name = "FILE")]
    pub inventory: PathBuf,

    /// Output format: a media type such as application/spdx+json,
    /// or one of cyclonedx, cdx, spdx, syft [default: cyclonedx]
    #[arg(short, long, value_name = "ID")]
    pub format: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to sbom-formatter.config.yml next to the inventory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show detailed progress messages
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
