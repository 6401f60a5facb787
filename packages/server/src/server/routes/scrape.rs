//! Product-page scrape route.

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use extraction::pipeline;
use serde::Deserialize;
use tracing::error;

use crate::server::app::AppState;
use crate::server::routes::error_body;

#[derive(Deserialize)]
pub struct ScrapeRequest {
    pub url: Option<String>,
}

/// POST /scrape-amazon
///
/// Validates the URL with a coarse domain-substring check before any network
/// call, fetches the page HTML, then runs the title and image pipelines in
/// one synchronous pass (the parsed document is `!Send` and never crosses an
/// await point).
pub async fn scrape_amazon_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<ScrapeRequest>,
) -> Response {
    let Some(url) = request.url.filter(|u| u.contains("amazon.")) else {
        return (StatusCode::BAD_REQUEST, error_body("Invalid Amazon URL")).into_response();
    };

    let html = match state.fetcher.fetch_page(&url).await {
        Ok(html) => html,
        Err(e) => {
            error!(url = %url, error = %e, timeout = e.is_timeout(), "scrape fetch failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_body("Failed to scrape Amazon page"),
            )
                .into_response();
        }
    };

    let listing = pipeline::extract_listing(&html, &url);
    Json(listing).into_response()
}
