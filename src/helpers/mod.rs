//! Helper functions shared by the list and detail pages

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
