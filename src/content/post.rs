//! Post models

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::FrontMatter;

/// One entry of the post manifest (`posts.json`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Markdown file name inside the pages directory
    pub file: String,

    #[serde(default)]
    pub title: String,

    /// Publication date as written in the manifest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Fields the front-end does not interpret
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl PostSummary {
    /// Create a summary with just a file and a title
    pub fn new(file: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            title: title.into(),
            date: None,
            category: None,
            excerpt: None,
            description: None,
            tags: Vec::new(),
            extra: HashMap::new(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Parse a manifest document
pub fn parse_manifest(json: &str) -> serde_json::Result<Vec<PostSummary>> {
    serde_json::from_str(json)
}

/// A fetched markdown post
#[derive(Debug, Clone)]
pub struct Post {
    pub file: String,
    pub front_matter: FrontMatter,
    /// Markdown body after the front-matter
    pub raw: String,
    /// Rendered HTML body
    pub content: String,
}
