//! Local directory backend

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::{check_path, Fetcher};
use crate::error::FetchError;

/// Reads resources from a directory on disk
#[derive(Debug, Clone)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl Fetcher for FsFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        check_path(path)?;
        let full = self.root.join(path);
        tracing::debug!("Reading {:?}", full);

        let bytes = tokio::fs::read(&full).await.map_err(|source| FetchError::Io {
            path: path.to_string(),
            source,
        })?;
        // Invalid sequences are replaced, as a browser decoding the response would
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
