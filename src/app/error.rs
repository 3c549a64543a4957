use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GamingLeaksError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: StatusCode, url: String },

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Category must not be empty")]
    InvalidCategory,

    #[error("News item not found: {0}")]
    NewsNotFound(i64),
}

/// Coarse classification of a failure, as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Host unreachable, connection reset, timeout.
    Network,
    /// The server answered with a non-2xx status.
    Protocol,
    /// The body was not the JSON shape we expect.
    Decode,
    /// Rejected before any request was sent.
    Local,
}

impl GamingLeaksError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GamingLeaksError::Http(e) if e.is_decode() => ErrorKind::Decode,
            GamingLeaksError::Http(e) if e.is_status() => ErrorKind::Protocol,
            GamingLeaksError::Http(_) => ErrorKind::Network,
            GamingLeaksError::Status { .. } => ErrorKind::Protocol,
            GamingLeaksError::Decode(_) => ErrorKind::Decode,
            GamingLeaksError::InvalidUrl(_)
            | GamingLeaksError::InvalidCategory
            | GamingLeaksError::NewsNotFound(_) => ErrorKind::Local,
        }
    }
}

pub type Result<T> = std::result::Result<T, GamingLeaksError>;
