//! Post list page: manifest loading, tag counts and tag filtering

mod render;

use std::collections::BTreeMap;

pub use render::{post_card, post_list, tag_filters, IndexView};

use crate::config::SiteConfig;
use crate::content::PostSummary;
use crate::error::Result;
use crate::fetch::{fetch_json, Fetcher};
use crate::i18n::I18n;

/// Count posts per tag, sorted by tag name
pub fn tag_counts(posts: &[PostSummary]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for post in posts {
        for tag in &post.tags {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Posts carrying `tag`; `None` keeps every post
pub fn filter_by_tag<'a>(posts: &'a [PostSummary], tag: Option<&str>) -> Vec<&'a PostSummary> {
    match tag {
        None => posts.iter().collect(),
        Some(tag) => posts.iter().filter(|post| post.has_tag(tag)).collect(),
    }
}

/// Fetch and parse the post manifest
pub async fn load_posts(fetcher: &dyn Fetcher, config: &SiteConfig) -> Result<Vec<PostSummary>> {
    let posts: Vec<PostSummary> = fetch_json(fetcher, &config.manifest).await?;
    tracing::info!("Loaded {} posts from {}", posts.len(), config.manifest);
    Ok(posts)
}

/// State of the post list page
#[derive(Debug, Clone)]
pub struct IndexPage {
    posts: Vec<PostSummary>,
    tag_counts: BTreeMap<String, usize>,
    active_tag: Option<String>,
    visible: Vec<PostSummary>,
}

impl IndexPage {
    pub fn new(posts: Vec<PostSummary>) -> Self {
        let tag_counts = tag_counts(&posts);
        let visible = posts.clone();
        Self {
            posts,
            tag_counts,
            active_tag: None,
            visible,
        }
    }

    /// Every post in manifest order
    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    pub fn visible(&self) -> &[PostSummary] {
        &self.visible
    }

    pub fn tag_counts(&self) -> &BTreeMap<String, usize> {
        &self.tag_counts
    }

    pub fn active_tag(&self) -> Option<&str> {
        self.active_tag.as_deref()
    }

    /// Click on a tag button
    ///
    /// Clicking the active tag clears the filter; any other tag becomes the
    /// only active one. Returns the active tag afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> Option<&str> {
        if self.active_tag.as_deref() == Some(tag) {
            self.active_tag = None;
        } else {
            self.active_tag = Some(tag.to_string());
        }
        tracing::debug!("Active tag: {:?}", self.active_tag);
        self.visible = filter_by_tag(&self.posts, self.active_tag.as_deref())
            .into_iter()
            .cloned()
            .collect();
        self.active_tag()
    }

    /// Show posts for `tag` without touching the active button state
    pub fn filter_by_tag(&mut self, tag: Option<&str>) {
        self.visible = filter_by_tag(&self.posts, tag)
            .into_iter()
            .cloned()
            .collect();
    }

    /// Replace the visible posts, e.g. with search results
    pub fn show(&mut self, posts: Vec<PostSummary>) {
        self.visible = posts;
    }

    /// Render the page
    pub fn view(&self, config: &SiteConfig, i18n: &I18n) -> IndexView {
        let (posts_html, no_results) = post_list(&self.visible, config, i18n);
        IndexView {
            loading: false,
            posts_html,
            no_results,
            tag_filters: tag_filters(&self.tag_counts, self.active_tag()),
        }
    }
}

/// Load the manifest and render the list page, falling back to the error view
pub async fn load_index(
    fetcher: &dyn Fetcher,
    config: &SiteConfig,
    i18n: &I18n,
) -> (Option<IndexPage>, IndexView) {
    match load_posts(fetcher, config).await {
        Ok(posts) => {
            let page = IndexPage::new(posts);
            let view = page.view(config, i18n);
            (Some(page), view)
        }
        Err(e) => {
            tracing::error!("Failed to load posts from {}: {}", fetcher.describe(), e);
            (None, IndexView::failed(i18n))
        }
    }
}
