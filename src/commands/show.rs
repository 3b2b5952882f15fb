//! Show a single post

use anyhow::{bail, Result};

use crate::detail::{PostPage, PostStatus};
use crate::helpers::{file_param, html_escape};
use crate::Blog;

/// File requested by a command line target: a detail page URL or a file name
pub fn requested_file(target: &str) -> Option<String> {
    if target.contains('?') {
        file_param(target)
    } else {
        Some(target.to_string()).filter(|t| !t.is_empty())
    }
}

/// Load and print a post
pub async fn run(blog: &Blog, target: &str, html: bool) -> Result<()> {
    let file = requested_file(target);
    let page = blog.load_post(file.as_deref()).await;

    if html {
        println!("{}", render_article(&page));
    } else {
        println!("{}", page.document_title);
        if let Some(date) = &page.meta.date_display {
            println!("Date: {}", date);
        }
        if let Some(category) = &page.meta.category {
            println!("Category: {}", category);
        }
        if !page.meta.tags.is_empty() {
            println!("Tags: {}", page.meta.tags.join(", "));
        }
        println!();
        println!("{}", page.content_html);
    }

    match page.status {
        PostStatus::Loaded => Ok(()),
        PostStatus::NotFound => bail!("No post requested in {:?}", target),
        PostStatus::Failed => bail!("Could not load post {:?}", file.unwrap_or_default()),
    }
}

/// Compose the detail page body as one HTML fragment
pub fn render_article(page: &PostPage) -> String {
    let meta = &page.meta;
    let mut html = String::from("<article class=\"post\">\n<header>\n");

    if let Some(title) = &meta.title {
        html.push_str(&format!(
            "<h1 id=\"post-title\">{}</h1>\n",
            html_escape(title)
        ));
    }
    if let Some(date) = meta.date_html() {
        html.push_str(&format!("<div id=\"post-date\">{}</div>\n", date));
    }
    if let Some(category) = &meta.category {
        html.push_str(&format!(
            "<span id=\"post-category\">{}</span>\n",
            html_escape(category)
        ));
    }
    if let Some(tags) = meta.tags_html() {
        html.push_str(&format!("<div id=\"post-tags\">{}</div>\n", tags));
    }

    html.push_str("</header>\n");
    html.push_str(&format!(
        "<div id=\"post-content\">\n{}</div>\n",
        page.content_html
    ));
    if let Some(comments) = &page.comments_html {
        html.push_str(&format!(
            "<div id=\"giscus-container\">{}</div>\n",
            comments
        ));
    }
    html.push_str("</article>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::PostMeta;

    #[test]
    fn test_requested_file() {
        assert_eq!(requested_file("hello.md").as_deref(), Some("hello.md"));
        assert_eq!(
            requested_file("post.html?file=hello%20world.md").as_deref(),
            Some("hello world.md")
        );
        assert_eq!(requested_file("post.html?lang=ko"), None);
        assert_eq!(requested_file(""), None);
    }

    #[test]
    fn test_render_article() {
        let page = PostPage {
            status: PostStatus::Loaded,
            document_title: "Hi - Blog".to_string(),
            meta: PostMeta {
                title: Some("Hi".to_string()),
                date: Some("2024-01-15".to_string()),
                date_display: Some("January 15, 2024".to_string()),
                category: None,
                tags: vec!["rust".to_string()],
            },
            content_html: "<p>Body</p>\n".to_string(),
            comments_html: Some("<script></script>".to_string()),
        };

        let html = render_article(&page);
        assert!(html.contains("<h1 id=\"post-title\">Hi</h1>"));
        assert!(html.contains(r#"<time datetime="2024-01-15">January 15, 2024</time>"#));
        assert!(!html.contains("post-category"));
        assert!(html.contains(r#"<div id="post-tags"><span class="tag">rust</span></div>"#));
        assert!(html.contains("<div id=\"post-content\">\n<p>Body</p>\n</div>"));
        assert!(html.contains("<div id=\"giscus-container\"><script></script></div>"));
    }
}
