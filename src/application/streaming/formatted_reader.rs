use crate::application::dto::FormatId;
use crate::application::factories::FormatterFactory;
use crate::ports::outbound::DocumentEncoder;
use crate::sbom_generation::domain::ComponentInventory;
use crate::shared::error::SbomError;
use std::io::{self, BufRead, Cursor, Read};

/// Observable lifecycle of a `FormattedReader`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    /// Nothing has been read; no encoding has happened
    Uninitialized,
    /// The document is cached and bytes remain
    Streaming,
    /// Every byte has been handed out
    Exhausted,
    /// Encoding failed; every read returns the same error
    Failed,
}

/// Lazily encoded SBOM exposed as a byte stream
///
/// Construction stores the inventory and the requested format and nothing
/// else. The first `read` runs the encoder exactly once and caches either
/// the document or the error. Later reads drain the cached document
/// through a cursor, or replay the error.
///
/// One reader serves one consumer. The inventory is only borrowed, so
/// several readers in different formats can share it.
///
/// # Example
/// ```
/// use sbom_formatter::prelude::*;
/// use std::io::Read;
///
/// let inventory = ComponentInventory::new(
///     "testdata/",
///     vec![Component::new("once".to_string()).unwrap()],
///     SbomGenerator::generate_default_metadata(),
/// );
///
/// let mut json = String::new();
/// FormattedReader::new(&inventory, OutputFormat::CycloneDx)
///     .read_to_string(&mut json)
///     .unwrap();
/// assert!(json.contains("\"bomFormat\": \"CycloneDX\""));
///
/// let err = FormattedReader::new(&inventory, "unknown-format")
///     .read(&mut [0u8; 10])
///     .unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "failed to format sbom: unsupported format \"unknown-format\""
/// );
/// ```
pub struct FormattedReader<'a, E = FormatterFactory> {
    inventory: &'a ComponentInventory,
    format: FormatId,
    encoder: E,
    document: Option<Result<Cursor<Vec<u8>>, SbomError>>,
}

impl<'a> FormattedReader<'a> {
    /// Creates a reader backed by the built-in formatters
    pub fn new(inventory: &'a ComponentInventory, format: impl Into<FormatId>) -> Self {
        Self::with_encoder(inventory, format, FormatterFactory)
    }
}

impl<'a, E: DocumentEncoder> FormattedReader<'a, E> {
    /// Creates a reader that encodes through a custom `DocumentEncoder`
    pub fn with_encoder(
        inventory: &'a ComponentInventory,
        format: impl Into<FormatId>,
        encoder: E,
    ) -> Self {
        Self {
            inventory,
            format: format.into(),
            encoder,
            document: None,
        }
    }

    /// The format identifier as it was requested
    pub fn format(&self) -> &FormatId {
        &self.format
    }

    pub fn state(&self) -> ReaderState {
        match &self.document {
            None => ReaderState::Uninitialized,
            Some(Err(_)) => ReaderState::Failed,
            Some(Ok(cursor)) if cursor.position() >= cursor.get_ref().len() as u64 => {
                ReaderState::Exhausted
            }
            Some(Ok(_)) => ReaderState::Streaming,
        }
    }

    /// Bytes handed out so far
    pub fn position(&self) -> u64 {
        match &self.document {
            Some(Ok(cursor)) => cursor.position(),
            _ => 0,
        }
    }

    /// Length of the encoded document, once known
    pub fn document_len(&self) -> Option<usize> {
        match &self.document {
            Some(Ok(cursor)) => Some(cursor.get_ref().len()),
            _ => None,
        }
    }

    /// The cached failure, if encoding failed
    pub fn error(&self) -> Option<&SbomError> {
        match &self.document {
            Some(Err(err)) => Some(err),
            _ => None,
        }
    }

    /// Runs the encoder on first use and returns the cached outcome
    fn document(&mut self) -> io::Result<&mut Cursor<Vec<u8>>> {
        let document = self.document.get_or_insert_with(|| {
            self.encoder
                .encode(self.inventory, &self.format)
                .map(Cursor::new)
                .map_err(SbomError::from)
        });

        match document {
            Ok(cursor) => Ok(cursor),
            Err(err) => Err(io::Error::other(err.clone())),
        }
    }
}

impl<E: DocumentEncoder> Read for FormattedReader<'_, E> {
    /// Copies `min(buf.len(), remaining)` bytes; `Ok(0)` once exhausted
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.document()?.read(buf)
    }
}

impl<E: DocumentEncoder> BufRead for FormattedReader<'_, E> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.document()?.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        if let Some(Ok(cursor)) = self.document.as_mut() {
            cursor.consume(amt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::OutputFormat;
    use crate::shared::error::FormatError;
    use crate::sbom_generation::domain::{Component, SbomMetadata};
    use std::cell::Cell;

    /// Encoder returning a fixed payload and counting its invocations
    struct FixedEncoder {
        payload: Result<Vec<u8>, FormatError>,
        calls: Cell<usize>,
    }

    impl FixedEncoder {
        fn ok(payload: &[u8]) -> Self {
            Self {
                payload: Ok(payload.to_vec()),
                calls: Cell::new(0),
            }
        }

        fn failing(error: FormatError) -> Self {
            Self {
                payload: Err(error),
                calls: Cell::new(0),
            }
        }
    }

    impl DocumentEncoder for FixedEncoder {
        fn encode(
            &self,
            _inventory: &ComponentInventory,
            _format: &FormatId,
        ) -> Result<Vec<u8>, FormatError> {
            self.calls.set(self.calls.get() + 1);
            self.payload.clone()
        }
    }

    fn inventory() -> ComponentInventory {
        let components = ["once", "pump", "wrappy"]
            .iter()
            .map(|n| Component::new(n.to_string()).unwrap())
            .collect();
        ComponentInventory::new(
            "testdata/",
            components,
            SbomMetadata::new(
                "2024-01-01T00:00:00Z".to_string(),
                "sbom-formatter".to_string(),
                "1.0.0".to_string(),
                "urn:uuid:00000000-0000-4000-8000-000000000001".to_string(),
            ),
        )
    }

    #[test]
    fn test_construction_does_not_encode() {
        let inventory = inventory();
        let encoder = FixedEncoder::ok(b"hello");
        let reader = FormattedReader::with_encoder(&inventory, "anything", &encoder);

        assert_eq!(encoder.calls.get(), 0);
        assert_eq!(reader.state(), ReaderState::Uninitialized);
        assert_eq!(reader.document_len(), None);
        assert_eq!(reader.format().as_str(), "anything");
    }

    #[test]
    fn test_encodes_exactly_once() {
        let inventory = inventory();
        let encoder = FixedEncoder::ok(b"0123456789abcdef");
        let mut reader = FormattedReader::with_encoder(&inventory, "x", &encoder);

        let mut buf = [0u8; 3];
        while reader.read(&mut buf).unwrap() > 0 {}
        reader.read(&mut buf).unwrap();

        assert_eq!(encoder.calls.get(), 1);
    }

    #[test]
    fn test_small_reads_advance_cursor() {
        let inventory = inventory();
        let encoder = FixedEncoder::ok(b"0123456789");
        let mut reader = FormattedReader::with_encoder(&inventory, "x", &encoder);

        let mut buf = [0u8; 4];
        assert_eq!(reader.read(&mut buf).unwrap(), 4);
        assert_eq!(&buf, b"0123");
        assert_eq!(reader.state(), ReaderState::Streaming);
        assert_eq!(reader.position(), 4);

        assert_eq!(reader.read(&mut buf).unwrap(), 4);
        assert_eq!(&buf, b"4567");

        assert_eq!(reader.read(&mut buf).unwrap(), 2);
        assert_eq!(&buf[..2], b"89");
        assert_eq!(reader.state(), ReaderState::Exhausted);
        assert_eq!(reader.document_len(), Some(10));
    }

    #[test]
    fn test_large_buffer_returns_short_count() {
        let inventory = inventory();
        let encoder = FixedEncoder::ok(b"abc");
        let mut reader = FormattedReader::with_encoder(&inventory, "x", &encoder);

        let mut buf = [0u8; 64];
        assert_eq!(reader.read(&mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], b"abc");
    }

    #[test]
    fn test_end_of_stream_is_sticky() {
        let inventory = inventory();
        let encoder = FixedEncoder::ok(b"abc");
        let mut reader = FormattedReader::with_encoder(&inventory, "x", &encoder);

        let mut sink = Vec::new();
        reader.read_to_end(&mut sink).unwrap();

        let mut buf = [0u8; 8];
        for _ in 0..3 {
            assert_eq!(reader.read(&mut buf).unwrap(), 0);
            assert_eq!(reader.state(), ReaderState::Exhausted);
        }
        assert_eq!(reader.position(), 3);
    }

    #[test]
    fn test_empty_buffer_triggers_encoding() {
        let inventory = inventory();
        let encoder = FixedEncoder::ok(b"abc");
        let mut reader = FormattedReader::with_encoder(&inventory, "x", &encoder);

        assert_eq!(reader.read(&mut []).unwrap(), 0);
        assert_eq!(encoder.calls.get(), 1);
        assert_eq!(reader.state(), ReaderState::Streaming);
    }

    #[test]
    fn test_unsupported_format_error() {
        let inventory = inventory();
        let mut reader = FormattedReader::new(&inventory, "unknown-format");

        let err = reader.read(&mut [0u8; 10]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert_eq!(
            err.to_string(),
            "failed to format sbom: unsupported format \"unknown-format\""
        );
        assert_eq!(reader.state(), ReaderState::Failed);
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_failure_is_sticky_and_not_retried() {
        let inventory = inventory();
        let encoder = FixedEncoder::failing(FormatError::encoding("SPDX", "broken"));
        let mut reader = FormattedReader::with_encoder(&inventory, "spdx", &encoder);

        let mut buf = [0u8; 16];
        let first = reader.read(&mut buf).unwrap_err().to_string();
        let second = reader.read(&mut buf).unwrap_err().to_string();

        assert_eq!(first, "failed to format sbom: failed to encode SPDX document: broken");
        assert_eq!(first, second);
        assert_eq!(encoder.calls.get(), 1);
        assert!(matches!(
            reader.error(),
            Some(SbomError::FormatFailed(FormatError::Encoding { .. }))
        ));
    }

    #[test]
    fn test_error_downcasts_to_sbom_error() {
        let inventory = inventory();
        let mut reader = FormattedReader::new(&inventory, "nope");

        let err = reader.read(&mut [0u8; 1]).unwrap_err();
        let inner = err
            .get_ref()
            .and_then(|e| e.downcast_ref::<SbomError>())
            .unwrap();
        assert!(matches!(
            inner,
            SbomError::FormatFailed(FormatError::UnsupportedFormat(id)) if id == "nope"
        ));
    }

    #[test]
    fn test_chunked_reads_match_single_read() {
        let inventory = inventory();
        for format in OutputFormat::ALL {
            let mut whole = Vec::new();
            FormattedReader::new(&inventory, format)
                .read_to_end(&mut whole)
                .unwrap();

            let mut chunked = Vec::new();
            let mut reader = FormattedReader::new(&inventory, format);
            let mut buf = [0u8; 10];
            loop {
                let n = reader.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                chunked.extend_from_slice(&buf[..n]);
            }

            assert_eq!(whole, chunked);
        }
    }

    #[test]
    fn test_buf_read_lines() {
        let inventory = inventory();
        let encoder = FixedEncoder::ok(b"first\nsecond\n");
        let reader = FormattedReader::with_encoder(&inventory, "x", &encoder);

        let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines, ["first", "second"]);
    }

    #[test]
    fn test_buf_read_propagates_failure() {
        let inventory = inventory();
        let mut reader = FormattedReader::new(&inventory, "unknown-format");

        assert!(reader.fill_buf().is_err());
        reader.consume(5);
        assert_eq!(reader.state(), ReaderState::Failed);
    }

    #[test]
    fn test_shared_inventory_many_readers() {
        let inventory = inventory();
        let mut readers: Vec<FormattedReader<'_>> = OutputFormat::ALL
            .iter()
            .map(|f| FormattedReader::new(&inventory, *f))
            .collect();

        for reader in readers.iter_mut() {
            let mut out = String::new();
            reader.read_to_string(&mut out).unwrap();
            assert!(out.contains("wrappy"));
        }
    }
}
