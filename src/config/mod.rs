//! Configuration module

mod site;

pub use site::CommentsConfig;
pub use site::MarkdownConfig;
pub use site::SearchConfig;
pub use site::SiteConfig;
