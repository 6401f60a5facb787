//! Title extraction.
//!
//! Ordered, first-match-wins chain: social-preview meta tag, the product
//! title element, the document title, then a title derived from the URL
//! slug. A fixed placeholder covers pages where all four come up empty.

use scraper::{Html, Selector};
use url::Url;

/// Neutral placeholder when nothing on the page or in the URL yields text.
const FALLBACK_TITLE: &str = "Amazon Product";

/// Extract the best available title for the page at `url`.
pub fn extract_title(document: &Html, url: &str) -> String {
    let raw = og_title(document)
        .or_else(|| element_text(document, "#productTitle"))
        .or_else(|| element_text(document, "title"))
        .or_else(|| title_from_url(url));

    match raw {
        Some(title) => decode_entities(&title),
        None => FALLBACK_TITLE.to_string(),
    }
}

fn og_title(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[property="og:title"]"#).ok()?;
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(str::to_string)
        .filter(|t| !t.is_empty())
}

fn element_text(document: &Html, selector_str: &str) -> Option<String> {
    let selector = Selector::parse(selector_str).ok()?;
    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Decode the entities that routinely show up in product titles. Applied in
/// this order so behavior stays bit-for-bit predictable for nested forms.
fn decode_entities(title: &str) -> String {
    title
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

/// Derive a title from the URL slug. Amazon product paths look like
/// `/Brand-Product-Name/dp/B000123456`; the segment before the `dp` marker
/// is a hyphenated human-readable slug.
fn title_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let segments: Vec<&str> = parsed.path().split('/').collect();
    let dp_index = segments.iter().position(|s| *s == "dp")?;

    if dp_index > 0 && dp_index + 1 < segments.len() {
        let slug = segments[dp_index - 1];
        let title = capitalize_words(&slug.replace('-', " "));
        return Some(title).filter(|t| !t.is_empty());
    }
    None
}

fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT_URL: &str = "https://www.amazon.com/Brand-Product-Name/dp/B000123456";

    #[test]
    fn test_og_title_wins_over_other_sources() {
        let html = r#"<html><head>
            <meta property="og:title" content="OG Title">
            <title>Page Title</title>
            </head><body><span id="productTitle"> Product Title </span></body></html>"#;
        let document = Html::parse_document(html);
        assert_eq!(extract_title(&document, PRODUCT_URL), "OG Title");
    }

    #[test]
    fn test_product_title_element_is_second_choice() {
        let html = r#"<html><head><title>Page Title</title></head>
            <body><span id="productTitle">  Product Title  </span></body></html>"#;
        let document = Html::parse_document(html);
        assert_eq!(extract_title(&document, PRODUCT_URL), "Product Title");
    }

    #[test]
    fn test_document_title_is_third_choice() {
        let html = r#"<html><head><title> Page Title </title></head><body></body></html>"#;
        let document = Html::parse_document(html);
        assert_eq!(extract_title(&document, PRODUCT_URL), "Page Title");
    }

    #[test]
    fn test_entities_are_decoded() {
        let html = r#"<html><head>
            <meta property="og:title" content="Men's Shoes &amp;amp; Boots">
            </head><body></body></html>"#;
        let document = Html::parse_document(html);
        // The HTML parser decodes one level, leaving the raw "&amp;" the
        // original pages carry in this attribute.
        assert_eq!(extract_title(&document, PRODUCT_URL), "Men's Shoes & Boots");
    }

    #[test]
    fn test_decode_entities_handles_all_five() {
        assert_eq!(
            decode_entities("&lt;b&gt; &quot;x&quot; &#39;y&#39; &amp; z"),
            "<b> \"x\" 'y' & z"
        );
    }

    #[test]
    fn test_url_slug_fallback() {
        let html = "<html><head></head><body></body></html>";
        let document = Html::parse_document(html);
        assert_eq!(extract_title(&document, PRODUCT_URL), "Brand Product Name");
    }

    #[test]
    fn test_dp_without_following_segment_yields_placeholder() {
        let html = "<html><head></head><body></body></html>";
        let document = Html::parse_document(html);
        assert_eq!(
            extract_title(&document, "https://www.amazon.com/Brand-Name/dp"),
            FALLBACK_TITLE
        );
    }

    #[test]
    fn test_no_dp_marker_yields_placeholder() {
        let html = "<html><head></head><body></body></html>";
        let document = Html::parse_document(html);
        assert_eq!(
            extract_title(&document, "https://www.amazon.com/gp/cart"),
            FALLBACK_TITLE
        );
    }

    #[test]
    fn test_unparsable_url_yields_placeholder() {
        let html = "<html><head></head><body></body></html>";
        let document = Html::parse_document(html);
        assert_eq!(extract_title(&document, "not a url"), FALLBACK_TITLE);
    }

    #[test]
    fn test_empty_sources_fall_through() {
        let html = r#"<html><head>
            <meta property="og:title" content="">
            <title>   </title>
            </head><body></body></html>"#;
        let document = Html::parse_document(html);
        assert_eq!(extract_title(&document, PRODUCT_URL), "Brand Product Name");
    }
}
