//! Content module - manifest entries, front-matter and markdown

mod frontmatter;
mod markdown;
mod post;

pub use frontmatter::{FrontMatter, MetaValue};
pub use markdown::MarkdownRenderer;
pub use post::{parse_manifest, Post, PostSummary};
