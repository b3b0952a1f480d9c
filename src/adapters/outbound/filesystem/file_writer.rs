use crate::ports::outbound::OutputPresenter;
use crate::shared::error::SbomError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Size of the chunk pulled before the output file is created
const FIRST_CHUNK_SIZE: usize = 8 * 1024;

/// Turns a failed stream copy into the error the user should see.
///
/// Failures raised by the formatted reader keep their own message; anything
/// else is reported against `path`.
fn stream_error(err: io::Error, path: &Path) -> anyhow::Error {
    match SbomError::from_io(&err) {
        Some(sbom_error) => sbom_error.into(),
        None => SbomError::FileWriteError {
            path: path.to_path_buf(),
            details: err.to_string(),
        }
        .into(),
    }
}

/// Reads until `buf` is full or the stream ends
fn read_first_chunk(content: &mut dyn Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match content.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// FileSystemWriter adapter for writing output to files
///
/// This adapter implements the OutputPresenter port for file output.
/// The file is only created once the stream has produced its first
/// chunk, so a document that fails to encode leaves nothing behind.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(SbomError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!(
                        "Parent directory does not exist: {}",
                        parent.display()
                    ),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Creates the output file and streams into it
    ///
    /// A file that could not be created is left as it was. Once creation
    /// succeeds, any later failure removes the partial document.
    fn write_stream(&self, first: &[u8], content: &mut dyn Read) -> Result<u64> {
        let file = File::create(&self.output_path).map_err(|e| SbomError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;

        Self::copy_into(BufWriter::new(file), first, content).map_err(|e| {
            let _ = fs::remove_file(&self.output_path);
            stream_error(e, &self.output_path)
        })
    }

    fn copy_into(
        mut writer: BufWriter<File>,
        first: &[u8],
        content: &mut dyn Read,
    ) -> io::Result<u64> {
        writer.write_all(first)?;
        let rest = io::copy(content, &mut writer)?;
        writer.flush()?;
        Ok(first.len() as u64 + rest)
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &mut dyn Read) -> Result<u64> {
        self.validate_parent_directory()?;
        validate_not_symlink(&self.output_path, "write the output")?;

        let mut first = vec![0u8; FIRST_CHUNK_SIZE];
        let n = read_first_chunk(content, &mut first)
            .map_err(|e| stream_error(e, &self.output_path))?;

        let written = self.write_stream(&first[..n], content)?;

        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(written)
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &mut dyn Read) -> Result<u64> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let written = io::copy(content, &mut handle).map_err(|e| match SbomError::from_io(&e) {
            Some(sbom_error) => anyhow::Error::from(sbom_error),
            None => anyhow::anyhow!("Failed to write to stdout: {}", e),
        })?;
        handle
            .flush()
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(written)
    }
}
