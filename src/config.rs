//! Configuration file support for sbom-formatter.
//!
//! Provides YAML-based configuration through `sbom-formatter.config.yml`
//! files, including data structures, file loading, validation and merging
//! with command-line options.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use sbom_formatter::application::dto::OutputFormat;
use sbom_formatter::shared::Result;

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "sbom-formatter.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub verbose: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Options after merging CLI flags, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedOptions {
    pub format: String,
    pub output: Option<PathBuf>,
    pub verbose: bool,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty document deserializes as unit, not as a map
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<(PathBuf, ConfigFile)>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some((config_path, config)))
}

/// Merge CLI flags over config values over defaults.
///
/// The format string is carried verbatim; an unknown identifier is only
/// reported once the document is read.
pub fn merge_config(args: &Args, config: Option<&ConfigFile>) -> MergedOptions {
    let format = args
        .format
        .clone()
        .or_else(|| config.and_then(|c| c.format.clone()))
        .unwrap_or_else(|| OutputFormat::CycloneDx.to_string());

    let output = args
        .output
        .clone()
        .or_else(|| config.and_then(|c| c.output.clone()));

    let verbose = args.verbose || config.and_then(|c| c.verbose).unwrap_or(false);

    MergedOptions {
        format,
        output,
        verbose,
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if format.trim().is_empty() {
            bail!(
                "Invalid config: format must not be empty.\n\n\
                 💡 Hint: Use a media type (e.g., \"application/spdx+json\") or one of cyclonedx, spdx, syft."
            );
        }
    }
    if let Some(ref output) = config.output {
        if output.as_os_str().is_empty() {
            bail!(
                "Invalid config: output must not be empty.\n\n\
                 💡 Hint: Remove the field to write to stdout."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
