//! Error types for the network lookups.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read response body: {0}")]
    Body(#[from] std::io::Error),

    #[error("malformed release metadata: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("release metadata has an empty `{0}` field")]
    EmptyField(&'static str),
}

impl FetchError {
    pub(crate) fn from_ureq(url: &str, err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, _) => FetchError::Status {
                url: url.to_string(),
                status,
            },
            ureq::Error::Transport(transport) => FetchError::Transport {
                url: url.to_string(),
                message: transport.to_string(),
            },
        }
    }
}
