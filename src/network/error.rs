//! Transport error - the one failure type for every network operation

/// Any failure talking to the posts API.
///
/// Callers treat all variants alike; the split only exists for logging.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Server answered with a non-2xx status
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// Body was not JSON or did not match the post shape
    #[error("invalid response body: {0}")]
    Parse(String),

    /// DNS, connect, reset or timeout
    #[error("{0}")]
    Network(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        let msg = if e.is_timeout() {
            "Request timed out".to_string()
        } else if e.is_connect() {
            format!("Connection failed: {}", e)
        } else if e.is_decode() {
            return TransportError::Parse(e.to_string());
        } else {
            format!("Request failed: {}", e)
        };
        TransportError::Network(msg)
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(e: serde_json::Error) -> Self {
        TransportError::Parse(e.to_string())
    }
}
