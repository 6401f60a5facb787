//! Image URL extraction.
//!
//! Four overlapping strategies scan the document and feed one deduplicated
//! accumulator; a final pass filters out chrome assets (placeholders, icons,
//! logos) and anything that does not look like a product photo, then caps
//! the result at [`MAX_IMAGES`].

use std::collections::HashSet;

use scraper::{Html, Selector};
use tracing::debug;

/// Substring every candidate URL must carry. Matches both `www.amazon.com`
/// page URLs and `m.media-amazon.com` CDN URLs.
const IMAGE_DOMAIN: &str = "amazon.com";

/// Cap on the returned image list.
pub const MAX_IMAGES: usize = 20;

/// Containment check, not a suffix check: Amazon CDN URLs embed sizing
/// directives after the extension (`…_AC_SL1500_.jpg`), and some variants
/// carry it in a query string.
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp"];

/// Run all four strategies and return the filtered, capped image list.
///
/// Insertion order is first-seen order, so the output is stable for a given
/// document regardless of how often the pipeline runs.
pub fn extract_images(document: &Html) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates: Vec<String> = Vec::new();

    {
        let mut add = |url: &str| {
            if seen.insert(url.to_string()) {
                candidates.push(url.to_string());
            }
        };

        collect_dynamic_images(document, &mut add);
        collect_attr(document, "src", &["placeholder", "icon"], &mut add);
        collect_attr(document, "data-src", &["placeholder"], &mut add);
        collect_attr(document, "data-lazy-src", &["placeholder"], &mut add);
    }

    candidates
        .into_iter()
        .filter(|url| is_product_image(url))
        .take(MAX_IMAGES)
        .collect()
}

/// Strategy 1: high-resolution URLs keyed in the responsive
/// `data-a-dynamic-image` attribute, a JSON object mapping URL to pixel
/// dimensions. A malformed value skips that element, never the pipeline.
fn collect_dynamic_images(document: &Html, add: &mut impl FnMut(&str)) {
    let selector = match Selector::parse("img[data-a-dynamic-image]") {
        Ok(s) => s,
        Err(_) => return,
    };

    for element in document.select(&selector) {
        let Some(raw) = element.value().attr("data-a-dynamic-image") else {
            continue;
        };
        match serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(raw) {
            Ok(dynamic_images) => {
                for url in dynamic_images.keys() {
                    if url.contains(IMAGE_DOMAIN) && !url.contains("placeholder") {
                        add(url);
                    }
                }
            }
            Err(e) => {
                debug!(error = %e, "skipping malformed data-a-dynamic-image value");
            }
        }
    }
}

/// Strategies 2-4: plain `src` and the two lazy-loading conventions.
fn collect_attr(document: &Html, attr: &str, excludes: &[&str], add: &mut impl FnMut(&str)) {
    let selector_str = if attr == "src" {
        "img".to_string()
    } else {
        format!("img[{attr}]")
    };
    let selector = match Selector::parse(&selector_str) {
        Ok(s) => s,
        Err(_) => return,
    };

    for element in document.select(&selector) {
        let Some(url) = element.value().attr(attr) else {
            continue;
        };
        if url.contains(IMAGE_DOMAIN) && !excludes.iter().any(|ex| url.contains(ex)) {
            add(url);
        }
    }
}

fn is_product_image(url: &str) -> bool {
    url.contains(IMAGE_DOMAIN)
        && !url.contains("placeholder")
        && !url.contains("icon")
        && !url.contains("logo")
        && IMAGE_EXTENSIONS.iter().any(|ext| url.contains(ext))
}
