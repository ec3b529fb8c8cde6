use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("request task failed: {0}")]
    Runtime(String),

    #[error("invalid API configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Classify a `ureq` error raised while sending a request to `url`.
    pub(crate) fn from_ureq(url: &str, err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(status) => ApiError::Status {
                url: url.to_string(),
                status,
            },
            other => ApiError::Transport {
                url: url.to_string(),
                message: other.to_string(),
            },
        }
    }
}
