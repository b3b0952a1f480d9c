/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// to provide user feedback without touching stdout output.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a detail message, shown only in verbose mode
    fn report_detail(&self, message: &str);

    /// Reports how many bytes have been streamed so far
    fn report_progress(&self, bytes_written: u64);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
