//! HTTP backend

use async_trait::async_trait;
use reqwest::{Client, Url};

use super::{check_path, Fetcher};
use crate::error::FetchError;

/// Fetches resources relative to a base URL
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    /// Create a fetcher for `base`; a missing trailing slash is added so
    /// that relative paths land inside it
    pub fn new(base: &str) -> Result<Self, FetchError> {
        Self::with_client(Client::new(), base)
    }

    pub fn with_client(client: Client, base: &str) -> Result<Self, FetchError> {
        let base = normalize_base(base)?;
        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Absolute URL of a resource
    pub fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        check_path(path)?;
        let url = self
            .base
            .join(path)
            .map_err(|_| FetchError::InvalidPath(path.to_string()))?;
        if !url.as_str().starts_with(self.base.as_str()) {
            return Err(FetchError::InvalidPath(path.to_string()));
        }
        Ok(url)
    }
}

fn normalize_base(base: &str) -> Result<Url, FetchError> {
    let with_slash = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    };
    Url::parse(&with_slash).map_err(|e| FetchError::BaseUrl {
        url: base.to_string(),
        reason: e.to_string(),
    })
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let url = self.resolve(path)?;
        tracing::debug!("GET {}", url);

        let http_err = |source| FetchError::Http {
            path: path.to_string(),
            source,
        };
        let response = self.client.get(url).send().await.map_err(http_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(http_err)
    }

    fn describe(&self) -> String {
        self.base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response per connection, in order
    async fn serve(responses: Vec<&'static str>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            for response in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                socket.write_all(response.as_bytes()).await.unwrap();
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{}/blog", addr)
    }

    fn local_fetcher(base: &str) -> HttpFetcher {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpFetcher::with_client(client, base).unwrap()
    }

    #[test]
    fn test_base_gets_trailing_slash() {
        let fetcher = HttpFetcher::new("https://example.com/blog").unwrap();
        assert_eq!(fetcher.base().as_str(), "https://example.com/blog/");
        assert_eq!(
            fetcher.resolve("posts.json").unwrap().as_str(),
            "https://example.com/blog/posts.json"
        );
    }

    #[test]
    fn test_resolve_encodes_path() {
        let fetcher = HttpFetcher::new("https://example.com/").unwrap();
        assert_eq!(
            fetcher.resolve("pages/hello world.md").unwrap().as_str(),
            "https://example.com/pages/hello%20world.md"
        );
    }

    #[test]
    fn test_resolve_rejects_escape() {
        let fetcher = HttpFetcher::new("https://example.com/blog/").unwrap();
        assert!(fetcher.resolve("../admin").is_err());
        assert!(fetcher.resolve("/admin").is_err());
    }

    #[test]
    fn test_resolve_rejects_encoded_escape() {
        let fetcher = HttpFetcher::new("https://example.com/blog/").unwrap();
        assert!(matches!(
            fetcher.resolve("pages/%2e%2e/%2e%2e/admin"),
            Err(FetchError::InvalidPath(_))
        ));
        assert!(fetcher.resolve("%2E%2E/admin").is_err());
    }

    #[tokio::test]
    async fn test_fetch_status_and_body() {
        let base = serve(vec![
            "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 7\r\nConnection: close\r\n\r\n# Hello",
        ])
        .await;
        let fetcher = local_fetcher(&base);

        let err = fetcher.fetch_text("pages/missing.md").await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Status { ref path, status: 404 } if path == "pages/missing.md"
        ));

        let text = fetcher.fetch_text("pages/hello.md").await.unwrap();
        assert_eq!(text, "# Hello");
    }

    #[test]
    fn test_invalid_base() {
        assert!(matches!(
            HttpFetcher::new("not a url"),
            Err(FetchError::BaseUrl { .. })
        ));
    }
}
