//! Hacker News top stories, fetched one page at a time.

use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{ApiError, Error};
use crate::model::HnItem;

/// Base URL of the public Hacker News API.
pub const HN_API_BASE: &str = "https://hacker-news.firebaseio.com/v0";

/// Host of the Hacker News website.
pub const HN_SITE: &str = "news.ycombinator.com";

/// Stories per page on the website.
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Link to an item's discussion page.
pub fn item_url(id: u64) -> String {
    format!("https://{}/item?id={}", HN_SITE, id)
}

/// Host to show next to a story title.
///
/// Strips a leading `www.`. Stories without a URL (or with one that does not
/// parse to a host) are attributed to the Hacker News site itself.
pub fn format_host(url: Option<&str>) -> String {
    url.and_then(|raw| Url::parse(raw).ok())
        .and_then(|parsed| {
            parsed
                .host_str()
                .map(|host| host.strip_prefix("www.").unwrap_or(host).to_string())
        })
        .filter(|host| !host.is_empty())
        .unwrap_or_else(|| HN_SITE.to_string())
}

/// Parse a `?page=` value: anything missing, non-numeric or zero is page 1.
pub fn parse_page_param(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Position of a page within the full story list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: usize,
    pub page_size: usize,
    /// Total number of stories across all pages.
    pub total: usize,
}

impl Pagination {
    /// Pages are 1-based; `0` is treated as the first page.
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        Self {
            page: page.max(1),
            page_size,
            total,
        }
    }

    /// Offset of the first story on this page.
    pub fn start(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// 1-based rank of the `index`-th story on this page.
    pub fn rank(&self, index: usize) -> usize {
        self.start() + index + 1
    }

    /// Relative link to the previous page.
    pub fn prev_link(&self) -> Option<String> {
        self.has_prev().then(|| format!("/?page={}", self.page - 1))
    }

    /// Relative link to the next page.
    pub fn next_link(&self) -> Option<String> {
        self.has_next().then(|| format!("/?page={}", self.page + 1))
    }
}

/// One page of stories plus the size of the full list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoriesPage {
    pub items: Vec<HnItem>,
    pub total: usize,
}

/// Client for the Hacker News API.
///
/// Cheap to clone; clones share the same HTTP connection pool.
///
/// # Example
///
/// ```ignore
/// let client = HnClient::new();
/// let page = client.stories_page(1, DEFAULT_PAGE_SIZE).await?;
/// for item in &page.items {
///     println!("{} ({})", item.title, item.host());
/// }
/// ```
#[derive(Clone)]
pub struct HnClient {
    inner: Arc<HnClientInner>,
}

struct HnClientInner {
    base_url: String,
    http_client: Client,
    timeout: Option<Duration>,
}

impl HnClient {
    /// Client for the public API with default settings.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(HnClientInner {
                base_url: HN_API_BASE.to_string(),
                http_client: Client::new(),
                timeout: None,
            }),
        }
    }

    /// Creates a new builder for constructing a client.
    pub fn builder() -> HnClientBuilder {
        HnClientBuilder::default()
    }

    /// Ids of the current top stories, best first.
    pub async fn top_story_ids(&self) -> Result<Vec<u64>, Error> {
        Ok(self
            .get_json("topstories.json", "Failed to fetch top stories")
            .await?)
    }

    /// Fetch a single item.
    pub async fn item(&self, id: u64) -> Result<HnItem, Error> {
        Ok(self
            .get_json(&format!("item/{}.json", id), &format!("Failed to fetch item {}", id))
            .await?)
    }

    /// Fetch one page of top stories.
    ///
    /// Items on the page are fetched concurrently; the first failure fails
    /// the whole page.
    pub async fn stories_page(&self, page: usize, page_size: usize) -> Result<StoriesPage, Error> {
        let ids = self.top_story_ids().await?;
        let total = ids.len();
        let pagination = Pagination::new(page, page_size, total);

        let start = pagination.start().min(total);
        let end = start.saturating_add(page_size).min(total);
        log::debug!(
            "Fetching stories {}..{} of {} (page {})",
            start,
            end,
            total,
            pagination.page
        );

        let items = try_join_all(ids[start..end].iter().map(|id| self.item(*id))).await?;
        Ok(StoriesPage { items, total })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.inner.base_url.trim_end_matches('/'), path);

        let mut request = self.inner.http_client.get(&url);
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            log::warn!("GET {} returned {}", url, status);
            return Err(ApiError::http(status, what));
        }
        Ok(response.json().await?)
    }
}

impl Default for HnClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing an [`HnClient`].
///
/// ```ignore
/// let client = HnClient::builder()
///     .base_url("http://127.0.0.1:8080/v0")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
#[derive(Default)]
pub struct HnClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl HnClientBuilder {
    /// Override the API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client, validating the base URL.
    pub fn build(self) -> Result<HnClient, ApiError> {
        let base_url = self.base_url.unwrap_or_else(|| HN_API_BASE.to_string());
        Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        Ok(HnClient {
            inner: Arc::new(HnClientInner {
                base_url,
                http_client: Client::new(),
                timeout: self.timeout,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_host_strips_www() {
        assert_eq!(
            format_host(Some("https://www.example.com/post/1")),
            "example.com"
        );
        assert_eq!(format_host(Some("https://blog.rust-lang.org/")), "blog.rust-lang.org");
    }

    #[test]
    fn test_format_host_only_leading_www() {
        assert_eq!(format_host(Some("https://docs.www.io/")), "docs.www.io");
    }

    #[test]
    fn test_format_host_fallback() {
        assert_eq!(format_host(None), HN_SITE);
        assert_eq!(format_host(Some("not a url")), HN_SITE);
    }

    #[test]
    fn test_parse_page_param() {
        assert_eq!(parse_page_param(None), 1);
        assert_eq!(parse_page_param(Some("3")), 3);
        assert_eq!(parse_page_param(Some("0")), 1);
        assert_eq!(parse_page_param(Some("-2")), 1);
        assert_eq!(parse_page_param(Some("abc")), 1);
        assert_eq!(parse_page_param(Some("")), 1);
    }

    #[test]
    fn test_pagination_first_page() {
        let p = Pagination::new(1, 30, 500);
        assert_eq!(p.start(), 0);
        assert_eq!(p.total_pages(), 17);
        assert!(!p.has_prev());
        assert!(p.has_next());
        assert_eq!(p.rank(0), 1);
        assert_eq!(p.prev_link(), None);
        assert_eq!(p.next_link().as_deref(), Some("/?page=2"));
    }

    #[test]
    fn test_pagination_last_page() {
        let p = Pagination::new(17, 30, 500);
        assert_eq!(p.start(), 480);
        assert_eq!(p.rank(2), 483);
        assert!(p.has_prev());
        assert!(!p.has_next());
        assert_eq!(p.prev_link().as_deref(), Some("/?page=16"));
    }

    #[test]
    fn test_pagination_zero_page_is_first() {
        let p = Pagination::new(0, 30, 10);
        assert_eq!(p.page, 1);
        assert_eq!(p.total_pages(), 1);
    }

    #[test]
    fn test_item_links() {
        let item = HnItem {
            id: 42,
            by: "pg".to_string(),
            title: "Ask HN".to_string(),
            url: None,
            kind: "story".to_string(),
            time: 0,
            score: Some(10),
            descendants: None,
        };
        assert_eq!(item.link(), "https://news.ycombinator.com/item?id=42");
        assert_eq!(item.host(), HN_SITE);
        assert_eq!(item.comments_label(), "discuss");
        assert_eq!(item.discussion_url(), item.link());

        let linked = HnItem {
            url: Some("https://example.com/post".to_string()),
            ..item
        };
        assert_eq!(linked.link(), "https://example.com/post");
        assert_eq!(linked.discussion_url(), "https://news.ycombinator.com/item?id=42");
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        let result = HnClient::builder().base_url("not a url").build();
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }
}
