//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use extraction::Fetcher;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::server::routes::{health_handler, proxy_image_handler, scrape_amazon_handler};

/// Shared application state
///
/// The fetcher is built once at startup; everything else is request-scoped.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<Fetcher>,
}

/// Build the Axum application router
pub fn build_app(fetcher: Arc<Fetcher>) -> Router {
    let app_state = AppState { fetcher };

    // CORS configuration - the web client runs on its own origin and the
    // proxy exists precisely to dodge cross-origin image blocking
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/proxy-image", get(proxy_image_handler))
        .route("/scrape-amazon", post(scrape_amazon_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
