// Amazon Scraper API
//
// This crate provides the HTTP surface for the product-page scraper: an
// image proxy that re-streams Amazon CDN images past referrer checks, and a
// scrape endpoint returning a product title plus candidate image URLs.

pub mod config;
pub mod server;

pub use config::*;
