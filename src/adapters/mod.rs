/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with the console, the file system
/// and the document schemas.
pub mod outbound;
