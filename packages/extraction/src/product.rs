//! Product listing types.

use serde::{Deserialize, Serialize};

/// Title and candidate image URLs extracted from one product page.
///
/// `images` is deduplicated, filtered, and capped at 20 entries. `title`
/// is never empty; when no source on the page or in the URL yields text it
/// holds a neutral placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListing {
    pub title: String,
    pub images: Vec<String>,
}
