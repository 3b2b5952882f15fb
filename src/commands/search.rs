//! Search posts from the command line

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::list::{post_line, render_view};
use crate::content::PostSummary;
use crate::listing::IndexPage;
use crate::search::{self, SearchEvent, SearchResults};
use crate::Blog;

/// Run a single search and print the matching posts
pub async fn run(blog: &Blog, query: &str, html: bool) -> Result<()> {
    let posts = blog.load_posts().await?;
    let found: Vec<_> = search::search(&posts, query).into_iter().cloned().collect();
    print_results(
        blog,
        &SearchResults {
            query: query.to_string(),
            posts: found,
        },
        &posts,
        html,
    );
    Ok(())
}

/// Treat each stdin line as the new content of the search box
///
/// Lines arriving faster than the debounce interval collapse into one
/// search for the latest line. End of input flushes the pending query.
pub async fn interactive(blog: &Blog, html: bool) -> Result<()> {
    let posts = blog.load_posts().await?;
    let (events, mut results, task) = blog.spawn_search(posts.clone()).into_parts();

    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if events.send(SearchEvent::Input(line)).await.is_err() {
                break;
            }
        }
        Ok::<_, std::io::Error>(())
    });

    while let Some(found) = results.recv().await {
        print_results(blog, &found, &posts, html);
    }

    reader.await??;
    task.await?;
    Ok(())
}

fn print_results(blog: &Blog, found: &SearchResults, all: &[PostSummary], html: bool) {
    if html {
        let mut page = IndexPage::new(all.to_vec());
        page.show(found.posts.clone());
        print!("{}", render_view(&page.view(&blog.config, &blog.i18n), &blog.i18n));
        return;
    }

    println!(
        "Search {:?}: {} of {} posts",
        found.query.trim(),
        found.posts.len(),
        all.len()
    );
    if found.posts.is_empty() {
        println!("  {}", blog.i18n.get("no_results"));
    }
    for post in &found.posts {
        println!("  {}", post_line(post, &blog.i18n));
    }
}
