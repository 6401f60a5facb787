//! Amazon Product-Page Extraction Library
//!
//! Fetches a product page as static HTML and pulls out a display title plus
//! a set of candidate product image URLs. Amazon exposes the same images
//! through several redundant DOM patterns (responsive dynamic-image sets,
//! plain `src`, and two lazy-loading conventions); no single pattern is
//! reliable across page variants, so all of them are tried and merged.
//!
//! # Usage
//!
//! ```rust,ignore
//! use extraction::{Fetcher, pipeline};
//!
//! let fetcher = Fetcher::new()?;
//! let html = fetcher.fetch_page("https://www.amazon.com/dp/B000123456").await?;
//! let listing = pipeline::extract_listing(&html, url);
//! println!("{}: {} images", listing.title, listing.images.len());
//! ```
//!
//! # Modules
//!
//! - [`fetch`] - HTTP clients with browser-like headers and timeouts
//! - [`pipeline`] - title and image extraction over parsed HTML
//! - [`user_agent`] - rotating pool of browser user-agent strings

pub mod error;
pub mod fetch;
pub mod pipeline;
pub mod product;
pub mod user_agent;

// Re-export core types at crate root
pub use error::FetchError;
pub use fetch::Fetcher;
pub use product::ProductListing;
pub use user_agent::random_user_agent;
