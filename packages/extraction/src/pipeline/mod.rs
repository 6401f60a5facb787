//! Extraction pipelines over a parsed product page.
//!
//! `scraper::Html` is not `Send`, so the document never crosses an await
//! point: callers fetch the HTML first, then run [`extract_listing`] as one
//! synchronous pass.

pub mod images;
pub mod title;

use scraper::Html;

use crate::product::ProductListing;

/// Parse `html` and run the title and image pipelines against it.
pub fn extract_listing(html: &str, url: &str) -> ProductListing {
    let document = Html::parse_document(html);

    ProductListing {
        title: title::extract_title(&document, url),
        images: images::extract_images(&document),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_listing_combines_pipelines() {
        let html = r#"<html><head>
            <meta property="og:title" content="Widget">
            </head><body>
            <img src="https://www.amazon.com/img1.jpg">
            </body></html>"#;

        let listing = extract_listing(html, "https://www.amazon.com/dp/B000123456");
        assert_eq!(listing.title, "Widget");
        assert_eq!(listing.images, vec!["https://www.amazon.com/img1.jpg"]);
    }

    #[test]
    fn test_extract_listing_is_idempotent() {
        let html = r#"<html><body>
            <img src="https://m.media-amazon.com/images/I/a.jpg">
            <img data-src="https://m.media-amazon.com/images/I/a.jpg">
            <img data-lazy-src="https://m.media-amazon.com/images/I/b.png">
            </body></html>"#;
        let url = "https://www.amazon.com/Thing/dp/B0";

        let first = extract_listing(html, url);
        let second = extract_listing(html, url);
        assert_eq!(first.images, second.images);
        assert_eq!(first.title, second.title);
    }
}
