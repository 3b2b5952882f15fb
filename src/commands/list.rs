//! List posts and tags

use anyhow::Result;

use crate::content::PostSummary;
use crate::helpers::{format_date, html_escape};
use crate::i18n::I18n;
use crate::listing::{IndexPage, IndexView};
use crate::Blog;

/// List posts, optionally filtered by a tag
pub async fn run(blog: &Blog, tag: Option<&str>, html: bool) -> Result<()> {
    let posts = blog.load_posts().await?;
    let mut page = IndexPage::new(posts);
    if let Some(tag) = tag {
        page.toggle_tag(tag);
    }

    if html {
        print!("{}", render_view(&page.view(&blog.config, &blog.i18n), &blog.i18n));
        return Ok(());
    }

    let visible = page.visible();
    match page.active_tag() {
        Some(tag) => println!("Posts tagged {:?} ({}):", tag, visible.len()),
        None => println!("Posts ({}):", visible.len()),
    }
    if visible.is_empty() {
        println!("  {}", blog.i18n.get("no_results"));
    }
    for post in visible {
        println!("  {}", post_line(post, &blog.i18n));
    }

    Ok(())
}

/// List tags with their post counts
pub async fn tags(blog: &Blog) -> Result<()> {
    let posts = blog.load_posts().await?;
    let page = IndexPage::new(posts);

    println!("Tags ({}):", page.tag_counts().len());
    for (tag, count) in page.tag_counts() {
        println!("  {} ({})", tag, count);
    }

    Ok(())
}

/// One line of the plain-text post list
pub fn post_line(post: &PostSummary, i18n: &I18n) -> String {
    let mut line = match post.date.as_deref() {
        Some(date) => format!("{} - {}", format_date(date, &i18n.date_format()), post.title),
        None => post.title.clone(),
    };
    if let Some(category) = post.category.as_deref().filter(|c| !c.is_empty()) {
        line.push_str(&format!(" <{}>", category));
    }
    line.push_str(&format!(" [{}]", post.file));
    if !post.tags.is_empty() {
        line.push_str(&format!(" #{}", post.tags.join(" #")));
    }
    line
}

/// Print a rendered list page as an HTML fragment
pub fn render_view(view: &IndexView, i18n: &I18n) -> String {
    let mut out = String::new();
    if view.loading {
        out.push_str(&format!(
            "<div id=\"loading\">{}</div>\n",
            html_escape(&i18n.get("loading"))
        ));
    }
    if let Some(filters) = &view.tag_filters {
        out.push_str(&format!("<div id=\"tag-filters\">\n{}\n</div>\n", filters));
    }
    out.push_str(&format!(
        "<div id=\"posts-list\">\n{}</div>\n",
        view.posts_html
    ));
    if view.no_results {
        out.push_str(&format!(
            "<div id=\"no-results\">{}</div>\n",
            html_escape(&i18n.get("no_results"))
        ));
    }
    out
}
