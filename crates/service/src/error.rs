use thiserror::Error;

/// Failures a caller of the service has to handle.
///
/// An empty recommendation list is a normal answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("movie data not available")]
    CatalogUnavailable,
}
