//! Errors surfaced by catalog queries.

/// Error returned by catalog fetches and query encoding.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The simulated request did not complete. The message doubles as the
    /// retry prompt rendered in the list view.
    #[error("request timed out, click to retry")]
    Timeout,
    /// A filter could not be written as a URL query string.
    #[error("failed to encode query: {0}")]
    Encode(String),
}
