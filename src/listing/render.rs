//! HTML fragments for the post list page

use std::collections::BTreeMap;

use crate::config::SiteConfig;
use crate::content::PostSummary;
use crate::helpers::{format_date, html_escape, post_url, tag_spans, time_tag};
use crate::i18n::I18n;

/// What the list page shows at a given moment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexView {
    /// Loading indicator visible
    pub loading: bool,
    /// Contents of the posts list
    pub posts_html: String,
    /// "No results" notice visible
    pub no_results: bool,
    /// Tag filter bar; `None` when hidden
    pub tag_filters: Option<String>,
}

impl IndexView {
    /// Before the manifest arrives
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    /// The manifest could not be loaded
    pub fn failed(i18n: &I18n) -> Self {
        Self {
            loading: false,
            posts_html: format!(
                "<div class=\"no-results\">\n  {}<br>\n  {}\n</div>",
                html_escape(&i18n.get("list_failed")),
                html_escape(&i18n.get("retry_later"))
            ),
            no_results: false,
            tag_filters: None,
        }
    }
}

/// Render one post card
pub fn post_card(post: &PostSummary, config: &SiteConfig, i18n: &I18n) -> String {
    let mut html = String::from("<article class=\"post-card\">\n");

    html.push_str(&format!(
        "  <h2 class=\"post-card-title\">\n    <a href=\"{}\">{}</a>\n  </h2>\n",
        html_escape(&post_url(&config.post_page, &post.file)),
        html_escape(&post.title)
    ));

    let date = post.date.as_deref().unwrap_or("");
    html.push_str("  <div class=\"post-card-meta\">\n    ");
    html.push_str(&time_tag(date, &format_date(date, &i18n.date_format())));
    if let Some(category) = post.category.as_deref().filter(|c| !c.is_empty()) {
        html.push_str(&format!(
            "\n    <span class=\"post-category\">{}</span>",
            html_escape(category)
        ));
    }
    html.push_str("\n  </div>\n");

    if let Some(excerpt) = post.excerpt.as_deref().filter(|e| !e.is_empty()) {
        html.push_str(&format!(
            "  <p class=\"post-card-excerpt\">{}</p>\n",
            html_escape(excerpt)
        ));
    }

    if !post.tags.is_empty() {
        html.push_str(&format!(
            "  <div class=\"post-card-tags\">{}</div>\n",
            tag_spans(&post.tags)
        ));
    }

    html.push_str("</article>\n");
    html
}

/// Render the visible posts; an empty list shows the "no results" notice
pub fn post_list<'a, I>(posts: I, config: &SiteConfig, i18n: &I18n) -> (String, bool)
where
    I: IntoIterator<Item = &'a PostSummary>,
{
    let html: String = posts
        .into_iter()
        .map(|post| post_card(post, config, i18n))
        .collect();
    let empty = html.is_empty();
    (html, empty)
}

/// Render the tag filter buttons, or `None` when no post has tags
pub fn tag_filters(counts: &BTreeMap<String, usize>, active: Option<&str>) -> Option<String> {
    if counts.is_empty() {
        return None;
    }

    let buttons = counts
        .iter()
        .map(|(tag, count)| {
            let class = if active == Some(tag.as_str()) {
                "tag-filter active"
            } else {
                "tag-filter"
            };
            format!(
                "<button class=\"{}\" data-tag=\"{}\">{} ({})</button>",
                class,
                html_escape(tag),
                html_escape(tag),
                count
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    Some(buttons)
}
