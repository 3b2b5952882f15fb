//! Debounced search driver
//!
//! Keystrokes restart a timer and only the last value is searched once
//! input pauses; submitting (Enter) searches right away.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::search;
use crate::content::PostSummary;

const CHANNEL_CAPACITY: usize = 64;

/// Input from the search box
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The box now holds this text
    Input(String),
    /// Enter was pressed with this text
    Submit(String),
}

/// Outcome of one fired search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    /// Raw query as typed
    pub query: String,
    pub posts: Vec<PostSummary>,
}

/// Running search task
#[derive(Debug)]
pub struct SearchHandle {
    events: mpsc::Sender<SearchEvent>,
    results: mpsc::Receiver<SearchResults>,
    task: JoinHandle<()>,
}

impl SearchHandle {
    /// Report a keystroke
    pub async fn input(&self, text: impl Into<String>) {
        self.send(SearchEvent::Input(text.into())).await;
    }

    /// Report Enter
    pub async fn submit(&self, text: impl Into<String>) {
        self.send(SearchEvent::Submit(text.into())).await;
    }

    async fn send(&self, event: SearchEvent) {
        if self.events.send(event).await.is_err() {
            tracing::warn!("Search task has stopped, input dropped");
        }
    }

    /// Wait for the next fired search; `None` once the task has finished
    pub async fn next_results(&mut self) -> Option<SearchResults> {
        self.results.recv().await
    }

    /// Split into the input sender, the results receiver and the task
    ///
    /// Dropping every sender flushes a pending query and ends the task.
    pub fn into_parts(
        self,
    ) -> (
        mpsc::Sender<SearchEvent>,
        mpsc::Receiver<SearchResults>,
        JoinHandle<()>,
    ) {
        (self.events, self.results, self.task)
    }
}

/// Start a search task over `posts`
///
/// Must be called from within a tokio runtime.
pub fn spawn(posts: Arc<Vec<PostSummary>>, delay: Duration) -> SearchHandle {
    let (events_tx, events_rx) = mpsc::channel(CHANNEL_CAPACITY);
    let (results_tx, results_rx) = mpsc::channel(CHANNEL_CAPACITY);

    let task = tokio::spawn(run(posts, delay, events_rx, results_tx));

    SearchHandle {
        events: events_tx,
        results: results_rx,
        task,
    }
}

async fn run(
    posts: Arc<Vec<PostSummary>>,
    delay: Duration,
    mut events: mpsc::Receiver<SearchEvent>,
    results: mpsc::Sender<SearchResults>,
) {
    let mut pending: Option<String> = None;

    loop {
        let event = if pending.is_some() {
            match tokio::time::timeout(delay, events.recv()).await {
                Ok(event) => event,
                Err(_elapsed) => {
                    if let Some(query) = pending.take() {
                        if !fire(&posts, query, &results).await {
                            break;
                        }
                    }
                    continue;
                }
            }
        } else {
            events.recv().await
        };

        match event {
            Some(SearchEvent::Input(text)) => pending = Some(text),
            Some(SearchEvent::Submit(text)) => {
                pending = None;
                if !fire(&posts, text, &results).await {
                    break;
                }
            }
            None => {
                if let Some(query) = pending.take() {
                    fire(&posts, query, &results).await;
                }
                break;
            }
        }
    }

    tracing::debug!("Search task finished");
}

/// Run one search; false once nobody listens for results
async fn fire(
    posts: &[PostSummary],
    query: String,
    results: &mpsc::Sender<SearchResults>,
) -> bool {
    let matched: Vec<PostSummary> = search(posts, &query).into_iter().cloned().collect();
    tracing::debug!("Search {:?}: {} of {} posts", query, matched.len(), posts.len());

    results
        .send(SearchResults {
            query,
            posts: matched,
        })
        .await
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    const DELAY: Duration = Duration::from_millis(300);

    fn posts() -> Arc<Vec<PostSummary>> {
        Arc::new(vec![
            PostSummary::new("a.md", "Rust ownership"),
            PostSummary::new("b.md", "Ruby blocks"),
        ])
    }

    fn files(results: &SearchResults) -> Vec<&str> {
        results.posts.iter().map(|p| p.file.as_str()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_fires_after_pause() {
        let mut handle = spawn(posts(), DELAY);
        let start = Instant::now();

        handle.input("rust").await;
        let results = handle.next_results().await.unwrap();

        assert_eq!(results.query, "rust");
        assert_eq!(files(&results), ["a.md"]);
        assert!(start.elapsed() >= DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keystrokes_restart_timer() {
        let mut handle = spawn(posts(), DELAY);
        let start = Instant::now();

        handle.input("r").await;
        tokio::time::sleep(Duration::from_millis(200)).await;
        handle.input("ru").await;
        tokio::time::sleep(Duration::from_millis(200)).await;
        handle.input("rub").await;

        let results = handle.next_results().await.unwrap();
        assert_eq!(results.query, "rub");
        assert_eq!(files(&results), ["b.md"]);
        // Last keystroke at 400ms plus a full delay
        assert!(start.elapsed() >= Duration::from_millis(700));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_is_immediate_and_cancels_pending() {
        let handle = spawn(posts(), DELAY);
        let start = Instant::now();

        handle.input("ru").await;
        handle.submit("rust").await;

        let (events, mut results, task) = handle.into_parts();
        let fired = results.recv().await.unwrap();
        assert_eq!(fired.query, "rust");
        assert!(start.elapsed() < DELAY);

        drop(events);
        // The pending "ru" was cancelled, nothing else fires
        assert_eq!(results.recv().await, None);
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_flushes_pending_query() {
        let handle = spawn(posts(), DELAY);
        handle.input("ru").await;
        handle.input("ruby").await;

        let (events, mut results, _task) = handle.into_parts();
        drop(events);

        let fired = results.recv().await.unwrap();
        assert_eq!(fired.query, "ruby");
        assert_eq!(results.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_input_shows_everything() {
        let mut handle = spawn(posts(), DELAY);
        handle.input("  ").await;
        let results = handle.next_results().await.unwrap();
        assert_eq!(files(&results), ["a.md", "b.md"]);
    }
}
