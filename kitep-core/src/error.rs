//! Error types for Kitep Core

use thiserror::Error;

/// Result type alias using FetchError
pub type Result<T> = std::result::Result<T, FetchError>;

/// Failure of a backend interaction.
///
/// The presentation layer receives this as an explicit value so it can show
/// a retry affordance; nothing in the core unwinds on a failed load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("server responded with HTTP {0}")]
    Status(u16),

    /// The response body did not match the expected record shapes.
    #[error("malformed response: {0}")]
    Decode(String),
}
