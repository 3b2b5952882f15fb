//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub language: String,

    // Where the manifest and pages live: a directory or a base URL
    pub source: Option<String>,
    pub manifest: String,
    pub pages_dir: String,

    // Links between the list page and the detail page
    pub index_page: String,
    pub post_page: String,

    /// chrono format string; the language default is used when unset
    pub date_format: Option<String>,

    #[serde(default)]
    pub markdown: MarkdownConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub comments: CommentsConfig,

    /// Overrides for localized messages, keyed like the built-in tables
    #[serde(default)]
    pub messages: HashMap<String, String>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            language: "ko".to_string(),

            source: None,
            manifest: "posts.json".to_string(),
            pages_dir: "pages".to_string(),

            index_page: "index.html".to_string(),
            post_page: "post.html".to_string(),

            date_format: None,

            markdown: MarkdownConfig::default(),
            search: SearchConfig::default(),
            comments: CommentsConfig::default(),

            messages: HashMap::new(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded configuration from {:?}", path.as_ref());
        Ok(config)
    }

    /// Path of a post file relative to the site root
    pub fn page_path(&self, file: &str) -> String {
        let dir = self.pages_dir.trim_matches('/');
        if dir.is_empty() {
            file.to_string()
        } else {
            format!("{}/{}", dir, file)
        }
    }
}

/// Markdown rendering options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// GitHub flavored extensions (tables, strikethrough, task lists, footnotes)
    pub gfm: bool,
    /// Render single newlines as `<br />`
    pub breaks: bool,
    pub highlight: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            gfm: true,
            breaks: true,
            highlight: true,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

/// Search box behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

/// giscus comment widget settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    pub enable: bool,
    pub script: String,
    pub repo: String,
    pub repo_id: String,
    pub category: String,
    pub category_id: String,
    pub mapping: String,
    pub strict: bool,
    pub reactions_enabled: bool,
    pub emit_metadata: bool,
    pub input_position: String,
    pub theme: String,
    pub lang: String,
    pub loading: String,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            enable: true,
            script: "https://giscus.app/client.js".to_string(),
            repo: String::new(),
            repo_id: String::new(),
            category: "General".to_string(),
            category_id: String::new(),
            mapping: "pathname".to_string(),
            strict: false,
            reactions_enabled: true,
            emit_metadata: true,
            input_position: "top".to_string(),
            theme: "preferred_color_scheme".to_string(),
            lang: "ko".to_string(),
            loading: "lazy".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.manifest, "posts.json");
        assert_eq!(config.pages_dir, "pages");
        assert_eq!(config.search.debounce(), Duration::from_millis(300));
        assert!(config.markdown.breaks);
        assert!(config.comments.enable);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: heejin0330 Blog
language: en
source: https://example.github.io/
search:
  debounce_ms: 150
comments:
  repo: someone/someone.github.io
  repo_id: R_abc
messages:
  no_results: Nothing here
theme_color: blue
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "heejin0330 Blog");
        assert_eq!(config.language, "en");
        assert_eq!(config.source.as_deref(), Some("https://example.github.io/"));
        assert_eq!(config.search.debounce_ms, 150);
        assert_eq!(config.comments.repo_id, "R_abc");
        // Untouched fields of a partial section keep their defaults
        assert_eq!(config.comments.mapping, "pathname");
        assert_eq!(config.messages["no_results"], "Nothing here");
        assert!(config.extra.contains_key("theme_color"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "title: File Blog\npages_dir: posts\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.title, "File Blog");
        assert_eq!(config.page_path("a.md"), "posts/a.md");
    }

    #[test]
    fn test_page_path_without_dir() {
        let config = SiteConfig {
            pages_dir: "/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.page_path("a.md"), "a.md");
    }
}
