/// Type alias for Result with anyhow::Error as the error type.
/// Used by the I/O facing layers; the format selector keeps its own typed
/// `FormatError` so failures can be cached and replayed.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
