//! The remote search API over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use finder_core::{RecentSearchList, SearchRequest, SearchResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::SearchApi;
use crate::error::RequestError;

/// Where the search API lives and how long to wait for it.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// API root, e.g. `"http://localhost:8000/api"`.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the search API.
///
/// The server keeps the context of the last `POST /search/` so that
/// `GET /search/?page=n` pages through it.
#[derive(Debug, Clone)]
pub struct HttpSearchApi {
    base_url: String,
    http: Client,
}

impl HttpSearchApi {
    /// Create a new client from the given configuration.
    pub fn new(config: HttpConfig) -> Result<Self, RequestError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn search_url(&self) -> String {
        format!("{}/search/", self.base_url)
    }

    pub fn page_url(&self, page: u32) -> String {
        format!("{}/search/?page={}", self.base_url, page)
    }

    pub fn recent_searches_url(&self) -> String {
        format!("{}/recent-searches/", self.base_url)
    }
}

#[async_trait]
impl SearchApi for HttpSearchApi {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, RequestError> {
        let url = self.search_url();
        debug!(%url, keyword = request.keyword(), "POST search");

        let response = self.http.post(&url).json(request).send().await?;
        let body = read_success(response, &url).await?;
        Ok(SearchResponse::from_slice(&body)?)
    }

    async fn page(&self, page: u32) -> Result<SearchResponse, RequestError> {
        let url = self.page_url(page);
        debug!(%url, page, "GET search page");

        let response = self.http.get(&url).send().await?;
        let body = read_success(response, &url).await?;
        Ok(SearchResponse::from_slice(&body)?)
    }

    async fn recent_searches(&self) -> Result<RecentSearchList, RequestError> {
        let url = self.recent_searches_url();
        debug!(%url, "GET recent searches");

        let response = self.http.get(&url).send().await?;
        let body = read_success(response, &url).await?;
        decode::<Vec<String>>(&body).map(RecentSearchList::from)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Read the body of a 2xx response; anything else is an error.
async fn read_success(response: reqwest::Response, url: &str) -> Result<Vec<u8>, RequestError> {
    let status = response.status();
    if !status.is_success() {
        return Err(RequestError::Http {
            status,
            url: url.to_string(),
        });
    }
    Ok(response.bytes().await?.to_vec())
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, RequestError> {
    serde_json::from_slice(body).map_err(|e| RequestError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use finder_core::SearchFilters;
    use http::StatusCode;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::sync::mpsc;

    use super::*;

    fn api(base: &str) -> HttpSearchApi {
        HttpSearchApi::new(HttpConfig {
            base_url: base.to_string(),
            ..HttpConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_urls() {
        let api = api("http://localhost:8000/api/");
        assert_eq!(api.search_url(), "http://localhost:8000/api/search/");
        assert_eq!(api.page_url(2), "http://localhost:8000/api/search/?page=2");
        assert_eq!(
            api.recent_searches_url(),
            "http://localhost:8000/api/recent-searches/"
        );
    }

    #[test]
    fn test_decode_recent() {
        let list: Vec<String> = decode(br#"["mouse", "keyboard"]"#).unwrap();
        assert_eq!(list.len(), 2);

        let err = decode::<Vec<String>>(b"{}").unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));
    }

    /// One request as the stub server saw it.
    #[derive(Debug)]
    struct Captured {
        request_line: String,
        body: String,
    }

    /// Local HTTP server answering every connection with the same response.
    /// Returns the API base URL and the requests it received.
    async fn stub(
        status: &'static str,
        body: &'static str,
    ) -> (String, mpsc::UnboundedReceiver<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let captured = read_request(&mut socket).await;
                let _ = tx.send(captured);

                let reply = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(reply.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        (format!("http://{}/api", addr), rx)
    }

    async fn read_request(socket: &mut TcpStream) -> Captured {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let header_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);

        while buf.len() < header_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before body");
            buf.extend_from_slice(&chunk[..n]);
        }

        Captured {
            request_line: head.lines().next().unwrap_or_default().to_string(),
            body: String::from_utf8_lossy(&buf[header_end..header_end + content_length]).to_string(),
        }
    }

    const PAGE_BODY: &str = r#"{
        "count": 13,
        "next": null,
        "previous": "http://localhost:8000/api/search/?page=1",
        "results": [{
            "id": 7,
            "title": "Premium Wireless Mouse",
            "price": "29.99",
            "rating": "4.50",
            "is_prime": true,
            "image_url": "https://img.example.com/7.jpg",
            "url": "https://shop.example.com/p/7"
        }]
    }"#;

    #[tokio::test]
    async fn test_search_posts_filters_as_json() {
        let (base, mut requests) = stub("200 OK", PAGE_BODY).await;
        let filters = SearchFilters {
            min_price: 0.0,
            max_price: 100.0,
            min_rating: 4.0,
            is_prime: true,
        };
        let request = SearchRequest::new("mouse", filters).unwrap();

        let response = api(&base).search(&request).await.unwrap();
        assert_eq!(response.count, 13);
        assert_eq!(response.results[0].id, "7");
        assert_eq!(response.results[0].price, 29.99);
        assert_eq!(response.results[0].product_url, "https://shop.example.com/p/7");

        let seen = requests.recv().await.unwrap();
        assert!(seen.request_line.starts_with("POST /api/search/ "));
        let body: serde_json::Value = serde_json::from_str(&seen.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "keyword": "mouse",
                "minPrice": 0.0,
                "maxPrice": 100.0,
                "minRating": 4.0,
                "isPrime": true
            })
        );
    }

    #[tokio::test]
    async fn test_page_is_a_get_with_query() {
        let (base, mut requests) = stub("200 OK", PAGE_BODY).await;

        let response = api(&base).page(2).await.unwrap();
        assert_eq!(response.results.len(), 1);
        assert!(response.next.is_none());

        let seen = requests.recv().await.unwrap();
        assert!(seen.request_line.starts_with("GET /api/search/?page=2 "));
    }

    #[tokio::test]
    async fn test_server_error_is_http_error() {
        let (base, _requests) = stub("500 Internal Server Error", r#"{"detail": "boom"}"#).await;
        let request = SearchRequest::new("mouse", SearchFilters::default()).unwrap();

        let err = api(&base).search(&request).await.unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(
            err.to_string(),
            "Search failed: server returned 500 Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_recent_searches_over_http() {
        let (base, mut requests) = stub("200 OK", r#"["mouse", "keyboard", "Mouse"]"#).await;

        let recent = api(&base).recent_searches().await.unwrap();
        let keywords: Vec<&str> = recent.iter().collect();
        assert_eq!(keywords, vec!["mouse", "keyboard"]);

        let seen = requests.recv().await.unwrap();
        assert!(seen.request_line.starts_with("GET /api/recent-searches/ "));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let (base, _requests) = stub("200 OK", r#"{"results": "nope"}"#).await;

        let err = api(&base).page(1).await.unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));
    }
}
