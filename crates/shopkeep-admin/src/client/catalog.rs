//! The full-catalog fetch loop for `AdminClient`.

use crate::dedup::dedup_by_id;
use crate::error::AdminError;
use crate::pacing::retry_with_policy;
use crate::pagination::next_page_cursor;
use crate::types::{Product, ProductsPage};

use super::{AdminClient, CursorMode, MAX_PAGES};

/// Result of a full catalog fetch.
///
/// A failed page request does not discard what earlier pages returned: the
/// loop stops and hands back everything accumulated so far, with the
/// terminal error attached for the caller to log.
#[derive(Debug)]
pub struct CatalogFetch {
    /// Products in server-returned order, de-duplicated by `id`.
    pub products: Vec<Product>,
    /// The error that ended the fetch early, if any.
    pub failure: Option<AdminError>,
}

impl CatalogFetch {
    /// `true` when every page was fetched and the collection ended normally.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

impl AdminClient {
    /// Fetches the entire product collection, following continuation cursors
    /// until a page comes back empty or carries no cursor.
    ///
    /// Each page request runs under the client's retry policy; the attempt
    /// counter is per page, so a successful fetch starts the next page at
    /// attempt one. When a page fails after all attempts the loop terminates
    /// and returns the partial accumulation with the error attached.
    ///
    /// The inter-page delay is applied between successful fetches, never
    /// before the first page. Repeated `id`s across pages are dropped.
    pub async fn fetch_catalog(&self, mode: CursorMode) -> CatalogFetch {
        let mut products: Vec<Product> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut is_first_page = true;
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                tracing::warn!(
                    max_pages = MAX_PAGES,
                    "pagination guard tripped, stopping with partial catalog"
                );
                return CatalogFetch {
                    products: dedup_by_id(products),
                    failure: Some(AdminError::PaginationLimit {
                        url: self.products_url(None),
                        max_pages: MAX_PAGES,
                    }),
                };
            }

            if !is_first_page && !self.pacing.inter_page_delay.is_zero() {
                tokio::time::sleep(self.pacing.inter_page_delay).await;
            }
            is_first_page = false;

            let request_cursor = cursor.clone();
            let result = retry_with_policy(self.pacing.retry, || {
                let cursor = request_cursor.clone();
                async move { self.fetch_page(cursor.as_deref()).await }
            })
            .await;

            let (page, link_header) = match result {
                Ok(fetched) => fetched,
                Err(err) => {
                    tracing::warn!(
                        page = page_count,
                        accumulated = products.len(),
                        error = %err,
                        "page fetch failed, returning partial catalog"
                    );
                    return CatalogFetch {
                        products: dedup_by_id(products),
                        failure: Some(err),
                    };
                }
            };

            let ProductsPage {
                products: items,
                next_page_info,
            } = page;

            if items.is_empty() {
                break;
            }

            tracing::info!(
                page = page_count,
                items = items.len(),
                "fetched catalog page"
            );
            products.extend(items);

            cursor = match mode {
                CursorMode::LinkHeader => next_page_cursor(link_header.as_deref()),
                CursorMode::BodyField => next_page_info,
            };
            if cursor.is_none() {
                break;
            }
        }

        CatalogFetch {
            products: dedup_by_id(products),
            failure: None,
        }
    }
}
