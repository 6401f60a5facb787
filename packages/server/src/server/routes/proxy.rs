//! Image proxy route.
//!
//! Amazon's CDN rejects hotlinked requests from browser contexts, so the
//! client asks this server to fetch the image with browser-shaped headers
//! and re-stream the bytes from a same-origin URL.

use axum::{
    body::Body,
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::error;

use crate::server::app::AppState;
use crate::server::routes::error_body;

#[derive(Deserialize)]
pub struct ProxyImageParams {
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// GET /proxy-image?imageUrl=...
///
/// Streams the upstream body through without buffering it; peak memory is a
/// few network buffers no matter how large the image is. Responses carry a
/// year-long public cache directive since CDN image URLs are immutable.
pub async fn proxy_image_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<ProxyImageParams>,
) -> Response {
    let Some(image_url) = params.image_url.filter(|u| !u.is_empty()) else {
        return (StatusCode::BAD_REQUEST, error_body("Image URL required")).into_response();
    };

    match state.fetcher.fetch_image(&image_url).await {
        Ok(upstream) => {
            let content_type = upstream
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("image/jpeg")
                .to_string();

            (
                [
                    (header::CONTENT_TYPE, content_type),
                    (
                        header::CACHE_CONTROL,
                        "public, max-age=31536000".to_string(),
                    ),
                ],
                Body::from_stream(upstream.bytes_stream()),
            )
                .into_response()
        }
        Err(e) => {
            error!(image_url = %image_url, error = %e, "image proxy fetch failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                error_body("Failed to proxy image"),
            )
                .into_response()
        }
    }
}
