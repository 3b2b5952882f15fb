//! Post detail page - fetches one markdown post and renders it

mod comments;

pub use comments::giscus_script;

use crate::content::{FrontMatter, Post};
use crate::error::Result;
use crate::helpers::{format_date, html_escape, tag_spans, time_tag};
use crate::i18n::I18n;
use crate::Blog;

/// How a detail page load ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostStatus {
    Loaded,
    /// No file was requested
    NotFound,
    /// The file could not be fetched
    Failed,
}

/// Metadata shown above a post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostMeta {
    pub title: Option<String>,
    /// Date as written in the front-matter
    pub date: Option<String>,
    /// Localized date
    pub date_display: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

impl PostMeta {
    pub fn from_front_matter(fm: &FrontMatter, i18n: &I18n) -> Self {
        let date = fm.date().map(str::to_string);
        let date_display = date
            .as_deref()
            .map(|raw| format_date(raw, &i18n.date_format()));

        Self {
            title: fm.title().map(str::to_string),
            date,
            date_display,
            category: fm.category().map(str::to_string),
            tags: fm.tags().map(<[String]>::to_vec).unwrap_or_default(),
        }
    }

    /// `<time>` element for the date
    pub fn date_html(&self) -> Option<String> {
        let raw = self.date.as_deref()?;
        Some(time_tag(raw, self.date_display.as_deref().unwrap_or(raw)))
    }

    /// Tag spans; `None` when the post declared no tag list
    pub fn tags_html(&self) -> Option<String> {
        (!self.tags.is_empty()).then(|| tag_spans(&self.tags))
    }
}

/// Everything the detail page shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPage {
    pub status: PostStatus,
    pub document_title: String,
    pub meta: PostMeta,
    /// Post body, or the localized error block
    pub content_html: String,
    /// Comment widget embed, only after a successful load
    pub comments_html: Option<String>,
}

impl PostPage {
    /// Page for a request without a file
    pub fn not_found(blog: &Blog) -> Self {
        let i18n = &blog.i18n;
        Self {
            status: PostStatus::NotFound,
            document_title: blog.config.title.clone(),
            meta: PostMeta::default(),
            content_html: format!(
                r#"<p>{} <a href="{}">{}</a></p>"#,
                html_escape(&i18n.get("post_not_found")),
                html_escape(&blog.config.index_page),
                html_escape(&i18n.get("back_to_list"))
            ),
            comments_html: None,
        }
    }

    /// Page for a file that could not be loaded
    pub fn failed(blog: &Blog) -> Self {
        let i18n = &blog.i18n;
        Self {
            status: PostStatus::Failed,
            document_title: blog.config.title.clone(),
            meta: PostMeta::default(),
            content_html: format!(
                "<p>{}</p>\n<p><a href=\"{}\">{}</a></p>",
                html_escape(&i18n.get("post_failed")),
                html_escape(&blog.config.index_page),
                html_escape(&i18n.get("back_to_list"))
            ),
            comments_html: None,
        }
    }

    /// Page for a fetched post
    pub fn loaded(blog: &Blog, post: &Post) -> Self {
        let meta = PostMeta::from_front_matter(&post.front_matter, &blog.i18n);
        let document_title = match &meta.title {
            Some(title) => format!("{} - {}", title, blog.config.title),
            None => blog.config.title.clone(),
        };

        Self {
            status: PostStatus::Loaded,
            document_title,
            meta,
            content_html: post.content.clone(),
            comments_html: giscus_script(&blog.config.comments),
        }
    }
}

/// Loads posts from the pages directory of a blog
pub struct PostLoader<'a> {
    blog: &'a Blog,
}

impl<'a> PostLoader<'a> {
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Fetch, parse and render one post
    pub async fn fetch_post(&self, file: &str) -> Result<Post> {
        let path = self.blog.config.page_path(file);
        let raw = self.blog.fetcher().fetch_text(&path).await?;

        let (front_matter, body) = FrontMatter::parse(&raw);
        if front_matter.is_empty() {
            tracing::debug!("{} has no front-matter", path);
        }
        let content = self.blog.renderer.render(body);

        Ok(Post {
            file: file.to_string(),
            front_matter,
            raw: body.to_string(),
            content,
        })
    }

    /// Load the detail page for `file` (the `file` query parameter)
    pub async fn load(&self, file: Option<&str>) -> PostPage {
        let Some(file) = file.filter(|f| !f.is_empty()) else {
            return PostPage::not_found(self.blog);
        };

        match self.fetch_post(file).await {
            Ok(post) => PostPage::loaded(self.blog, &post),
            Err(e) => {
                tracing::error!("Failed to load post {}: {}", file, e);
                PostPage::failed(self.blog)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::fetch::FsFetcher;
    use std::fs;
    use std::sync::Arc;

    fn blog_with(dir: &std::path::Path) -> Blog {
        let mut config = SiteConfig::default();
        config.title = "heejin0330 Blog".to_string();
        config.comments.repo = "someone/someone.github.io".to_string();
        Blog::new(config, Arc::new(FsFetcher::new(dir)))
    }

    #[tokio::test]
    async fn test_load_post() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("pages")).unwrap();
        fs::write(
            dir.path().join("pages/hello.md"),
            "---\ntitle: Hello\ndate: 2024-01-15\ncategory: dev\ntags: [rust, web]\n---\n# Heading\n\nBody text",
        )
        .unwrap();
        let blog = blog_with(dir.path());

        let page = PostLoader::new(&blog).load(Some("hello.md")).await;
        assert_eq!(page.status, PostStatus::Loaded);
        assert_eq!(page.document_title, "Hello - heejin0330 Blog");
        assert_eq!(
            page.meta.date_html().unwrap(),
            r#"<time datetime="2024-01-15">2024년 1월 15일</time>"#
        );
        assert_eq!(page.meta.category.as_deref(), Some("dev"));
        assert_eq!(
            page.meta.tags_html().unwrap(),
            r#"<span class="tag">rust</span><span class="tag">web</span>"#
        );
        assert!(page.content_html.contains("<h1>Heading</h1>"));
        assert!(page.comments_html.unwrap().contains("giscus.app"));
    }

    #[tokio::test]
    async fn test_post_without_front_matter() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("pages")).unwrap();
        fs::write(dir.path().join("pages/plain.md"), "Just *text*").unwrap();
        let blog = blog_with(dir.path());

        let page = PostLoader::new(&blog).load(Some("plain.md")).await;
        assert_eq!(page.status, PostStatus::Loaded);
        assert_eq!(page.document_title, "heejin0330 Blog");
        assert_eq!(page.meta, PostMeta::default());
        assert!(page.content_html.contains("<em>text</em>"));
    }

    #[tokio::test]
    async fn test_missing_file_param() {
        let dir = tempfile::tempdir().unwrap();
        let blog = blog_with(dir.path());
        let loader = PostLoader::new(&blog);

        for file in [None, Some("")] {
            let page = loader.load(file).await;
            assert_eq!(page.status, PostStatus::NotFound);
            assert_eq!(
                page.content_html,
                r#"<p>게시글을 찾을 수 없습니다. <a href="index.html">목록으로 돌아가기</a></p>"#
            );
            assert!(page.comments_html.is_none());
        }
    }

    #[tokio::test]
    async fn test_fetch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blog = blog_with(dir.path());

        let page = PostLoader::new(&blog).load(Some("missing.md")).await;
        assert_eq!(page.status, PostStatus::Failed);
        assert!(page.content_html.contains("게시글을 불러오는 데 실패했습니다."));
        assert!(page.comments_html.is_none());
    }

    #[tokio::test]
    async fn test_traversal_is_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blog = blog_with(dir.path());

        let page = PostLoader::new(&blog).load(Some("../../etc/passwd")).await;
        assert_eq!(page.status, PostStatus::Failed);
    }

    #[test]
    fn test_plain_text_tags_not_shown() {
        let (fm, _) = FrontMatter::parse("---\ntags: rust\n---\n");
        let meta = PostMeta::from_front_matter(&fm, &I18n::default());
        assert_eq!(meta.tags_html(), None);
    }
}
