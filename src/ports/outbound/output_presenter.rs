use crate::shared::Result;
use std::io::Read;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.).
/// Content arrives as a stream so encoding is deferred until the
/// presenter starts pulling.
pub trait OutputPresenter {
    /// Drains `content` into the output destination
    ///
    /// # Returns
    /// Number of bytes written
    ///
    /// # Errors
    /// Returns an error if:
    /// - Reading from `content` fails (e.g. unsupported format)
    /// - Writing to the output destination fails
    fn present(&self, content: &mut dyn Read) -> Result<u64>;
}

impl<P: OutputPresenter + ?Sized> OutputPresenter for Box<P> {
    fn present(&self, content: &mut dyn Read) -> Result<u64> {
        (**self).present(content)
    }
}
