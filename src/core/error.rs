//! Error types for remote service calls.

use thiserror::Error;

/// Network/API errors for REST requests.
///
/// Authorization failures arrive as `Http(401)`/`Http(403)` and are
/// treated as total failure of the in-flight call; the auth collaborator
/// owns credential refresh.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Transport failure (network down, CORS, aborted request).
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response from the server.
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Response body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
    /// Browser API unavailable or rejected (object URLs, DOM handles).
    #[error("browser error: {0}")]
    Browser(String),
}
