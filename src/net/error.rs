//! Error type shared by the network helpers.

use thiserror::Error;

/// Failure of a widget request before a usable response was decoded.
///
/// The `Display` text is what the news widget and the lead form surface to
/// the user, so variants carry the underlying message verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    #[error("{0}")]
    Network(String),
    /// The response body was not the expected JSON shape.
    #[error("{0}")]
    Decode(String),
    /// No HTTP transport exists in this build (native, non-browser).
    #[error("not available outside the browser")]
    Unavailable,
}
