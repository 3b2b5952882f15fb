//! Error types

use thiserror::Error;

/// Errors raised while fetching a resource from the site root
#[derive(Debug, Error)]
pub enum FetchError {
    /// The requested path is empty, absolute, or escapes the root
    #[error("invalid resource path: {0:?}")]
    InvalidPath(String),

    /// The server answered with a non-success status
    #[error("fetching {path} failed with status {status}")]
    Status { path: String, status: u16 },

    #[error("invalid base url {url}: {reason}")]
    BaseUrl { url: String, reason: String },

    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("requesting {path}: {source}")]
    Http {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Library-level error
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The post manifest is not a valid list of posts
    #[error("invalid post manifest {path}: {source}")]
    Manifest {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
