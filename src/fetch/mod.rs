//! Fetching site resources (manifest and markdown files)
//!
//! A [`Fetcher`] resolves paths relative to a site root, which is either a
//! local directory or a base URL.

mod fs;
mod http;

use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use serde::de::DeserializeOwned;
use std::sync::Arc;

pub use fs::FsFetcher;
pub use http::HttpFetcher;

use crate::error::{Error, FetchError};

/// Source of text resources under a site root
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the resource at `path` (relative to the root) as text
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;

    /// Human-readable location of the root, for logs
    fn describe(&self) -> String;
}

/// Whether a location is a base URL rather than a directory
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Open a fetcher for a directory or an `http(s)://` base URL
pub fn open(location: &str) -> Result<Arc<dyn Fetcher>, FetchError> {
    if is_remote(location) {
        Ok(Arc::new(HttpFetcher::new(location)?))
    } else {
        Ok(Arc::new(FsFetcher::new(location)))
    }
}

/// Fetch a JSON document and deserialize it
pub async fn fetch_json<T: DeserializeOwned>(
    fetcher: &dyn Fetcher,
    path: &str,
) -> Result<T, Error> {
    let text = fetcher.fetch_text(path).await?;
    serde_json::from_str(&text).map_err(|source| Error::Manifest {
        path: path.to_string(),
        source,
    })
}

/// Reject paths that are empty, absolute, or leave the root
///
/// Segments are also checked percent-decoded, since URL joining treats
/// `%2e%2e` as `..`.
pub(crate) fn check_path(path: &str) -> Result<(), FetchError> {
    let is_parent =
        |part: &str| part == ".." || percent_decode_str(part).decode_utf8_lossy() == "..";
    let invalid = path.is_empty()
        || path.starts_with('/')
        || path.starts_with('\\')
        || path.split(['/', '\\']).any(is_parent);
    if invalid {
        Err(FetchError::InvalidPath(path.to_string()))
    } else {
        Ok(())
    }
}
