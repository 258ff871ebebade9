//! Admin API response types for the `products.json` endpoint.
//!
//! Only the fields the tools interpret are modeled: `id` is the unique key
//! for delete requests and cross-page de-duplication, `handle` is the
//! duplicate-grouping key (not unique), `created_at` orders duplicates by
//! recency. `title` is carried for log lines only. Everything else in the
//! response is ignored by serde.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A single product from a `products.json` page.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    /// Numeric Shopify product ID (e.g. `6789012345678`).
    pub id: i64,

    /// Slug-like identifier. Duplicate listings share a handle.
    pub handle: String,

    /// Creation timestamp; the newest product per handle survives cleanup.
    /// Admin responses carry an offset (`-05:00` etc.); chrono normalizes to UTC.
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub title: Option<String>,
}

/// Top-level response from `GET <base>/products.json`.
///
/// `next_page_info` is the body-conveyed pagination cursor used by supplier
/// catalogs; store responses carry the cursor in the `Link` header instead
/// and leave this field absent.
#[derive(Debug, Deserialize)]
pub struct ProductsPage {
    pub products: Vec<Product>,

    #[serde(default)]
    pub next_page_info: Option<String>,
}
