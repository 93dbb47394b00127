//! Error type shared by every records API caller.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure talking to the records API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, CORS, offline).
    #[error("network error: {0}")]
    Network(String),
    /// The server rejected the bearer token (401/403).
    #[error("not authorized")]
    Unauthorized,
    /// Any other non-2xx response.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// The response body did not match the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Browser-only call attempted outside the browser (SSR).
    #[error("not available on server")]
    NotAvailable,
}

impl ApiError {
    /// Classify a non-2xx HTTP status.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            other => Self::Status(other),
        }
    }

    /// Whether the stored token should be discarded.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
