pub mod health;
pub mod proxy;
pub mod scrape;

pub use health::health_handler;
pub use proxy::proxy_image_handler;
pub use scrape::scrape_amazon_handler;

use axum::Json;
use serde::Serialize;

/// Fixed-message error body; upstream failure detail stays in the logs.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub(crate) fn error_body(message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: message.to_string(),
    })
}
