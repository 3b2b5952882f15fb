//! blogfront: a small blog front-end
//!
//! Loads a post manifest and markdown posts from a directory or a base
//! URL, renders them to HTML fragments, and filters the post list by tag
//! or by a debounced text search.

pub mod commands;
pub mod config;
pub mod content;
pub mod detail;
pub mod error;
pub mod fetch;
pub mod helpers;
pub mod i18n;
pub mod listing;
pub mod search;

use std::path::Path;
use std::sync::Arc;

use crate::content::{MarkdownRenderer, PostSummary};
use crate::detail::{PostLoader, PostPage};
use crate::fetch::Fetcher;
use crate::i18n::I18n;
use crate::listing::{IndexPage, IndexView};
use crate::search::SearchHandle;

/// The main blog handle
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Localized messages and date format
    pub i18n: I18n,
    /// Markdown renderer (syntax sets are loaded once)
    pub renderer: Arc<MarkdownRenderer>,
    fetcher: Arc<dyn Fetcher>,
}

impl Blog {
    /// Create a blog reading from `fetcher`
    pub fn new(config: config::SiteConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        let i18n = I18n::from_config(&config);
        let renderer = Arc::new(MarkdownRenderer::with_options(config.markdown.clone()));
        Self {
            config,
            i18n,
            renderer,
            fetcher,
        }
    }

    /// Create a blog for a location (directory or base URL)
    ///
    /// Falls back to `config.source`, then to `base_dir` itself. Relative
    /// directories are resolved against `base_dir`.
    pub fn open<P: AsRef<Path>>(
        config: config::SiteConfig,
        base_dir: P,
        location: Option<&str>,
    ) -> error::Result<Self> {
        let base_dir = base_dir.as_ref();
        let location = match location.or(config.source.as_deref()) {
            Some(loc) if fetch::is_remote(loc) => loc.to_string(),
            Some(dir) => base_dir.join(dir).to_string_lossy().into_owned(),
            None => base_dir.to_string_lossy().into_owned(),
        };

        let fetcher = fetch::open(&location)?;
        tracing::debug!("Reading site from {}", fetcher.describe());
        Ok(Self::new(config, fetcher))
    }

    pub fn fetcher(&self) -> &dyn Fetcher {
        self.fetcher.as_ref()
    }

    /// Fetch the post manifest
    pub async fn load_posts(&self) -> error::Result<Vec<PostSummary>> {
        listing::load_posts(self.fetcher(), &self.config).await
    }

    /// Load and render the post list page
    pub async fn load_index(&self) -> (Option<IndexPage>, IndexView) {
        listing::load_index(self.fetcher(), &self.config, &self.i18n).await
    }

    /// Load and render a post detail page
    pub async fn load_post(&self, file: Option<&str>) -> PostPage {
        PostLoader::new(self).load(file).await
    }

    /// Start a debounced search over `posts`
    pub fn spawn_search(&self, posts: Vec<PostSummary>) -> SearchHandle {
        search::spawn(Arc::new(posts), self.config.search.debounce())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_open_relative_source() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("site")).unwrap();
        fs::write(dir.path().join("site/posts.json"), "[]").unwrap();

        let config = config::SiteConfig {
            source: Some("site".to_string()),
            ..Default::default()
        };
        let blog = Blog::open(config, dir.path(), None).unwrap();
        assert!(blog.load_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_location_overrides_config_source() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("posts.json"), r#"[{"file": "a.md", "title": "A"}]"#).unwrap();

        let config = config::SiteConfig {
            source: Some("https://example.com/".to_string()),
            ..Default::default()
        };
        let location = dir.path().to_string_lossy().into_owned();
        let blog = Blog::open(config, "/", Some(location.as_str())).unwrap();
        assert_eq!(blog.load_posts().await.unwrap().len(), 1);
    }

    #[test]
    fn test_open_remote() {
        let config = config::SiteConfig::default();
        let blog = Blog::open(config, ".", Some("https://example.com/blog")).unwrap();
        assert_eq!(blog.fetcher().describe(), "https://example.com/blog/");
    }
}
