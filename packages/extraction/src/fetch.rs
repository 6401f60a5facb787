//! HTTP clients for page and image fetches.
//!
//! Both clients are built once at startup and shared across requests; only
//! the user agent rotates per call. No retries anywhere, a single failed
//! fetch is terminal for that request.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, ACCEPT, CONNECTION, REFERER, USER_AGENT};
use tracing::debug;

use crate::error::FetchError;
use crate::user_agent::random_user_agent;

/// Hard cap on a product-page fetch; Amazon occasionally tarpits bot-looking
/// requests and the handler must fail rather than hang.
const PAGE_TIMEOUT: Duration = Duration::from_secs(10);

/// Defensive bound on image fetches, which are unauthenticated CDN hits and
/// normally complete in well under a second.
const IMAGE_TIMEOUT: Duration = Duration::from_secs(30);

const PAGE_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const IMAGE_ACCEPT: &str = "image/webp,image/apng,image/*,*/*;q=0.8";
const IMAGE_REFERER: &str = "https://www.amazon.com/";

/// Shared fetcher with separate clients for HTML pages and proxied images.
pub struct Fetcher {
    pages: reqwest::Client,
    images: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_page_timeout(PAGE_TIMEOUT)
    }

    /// Build with a custom page timeout. Tests use a short bound so the
    /// slow-upstream path completes quickly.
    pub fn with_page_timeout(page_timeout: Duration) -> Result<Self, FetchError> {
        // Browser-like header set; Accept-Encoding is supplied by reqwest's
        // compression features so response bodies decompress transparently.
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, PAGE_ACCEPT.parse().unwrap());
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            "en-US,en;q=0.5".parse().unwrap(),
        );
        headers.insert(HeaderName::from_static("dnt"), "1".parse().unwrap());
        headers.insert(CONNECTION, "keep-alive".parse().unwrap());
        headers.insert(
            reqwest::header::UPGRADE_INSECURE_REQUESTS,
            "1".parse().unwrap(),
        );

        let pages = reqwest::Client::builder()
            .timeout(page_timeout)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        let images = reqwest::Client::builder().timeout(IMAGE_TIMEOUT).build()?;

        Ok(Self { pages, images })
    }

    /// Fetch a product page and return its HTML body.
    pub async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        debug!(url = %url, "fetching product page");
        let response = self
            .pages
            .get(url)
            .header(USER_AGENT, random_user_agent())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// Start an image fetch with spoofed browser headers and return the live
    /// response so the caller can stream the body without buffering it.
    pub async fn fetch_image(&self, url: &str) -> Result<reqwest::Response, FetchError> {
        debug!(url = %url, "proxying image");
        let response = self
            .images
            .get(url)
            .header(USER_AGENT, random_user_agent())
            .header(REFERER, IMAGE_REFERER)
            .header(ACCEPT, IMAGE_ACCEPT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }
}
