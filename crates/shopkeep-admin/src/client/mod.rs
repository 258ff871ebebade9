//! HTTP client for the Shopify Admin REST `products.json` endpoints.

mod catalog;

use std::time::Duration;

use reqwest::Client;

use crate::error::AdminError;
use crate::pacing::Pacing;
use crate::types::ProductsPage;

pub use catalog::CatalogFetch;

/// Header carrying the static access token on every request.
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Maximum number of pages to fetch before giving up.
/// Prevents infinite loops on cycling cursors.
const MAX_PAGES: usize = 500;

/// How the listing endpoint conveys its continuation cursor.
///
/// Store Admin responses carry the cursor in the `Link` response header;
/// the supplier catalog returns it as a `next_page_info` body field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMode {
    LinkHeader,
    BodyField,
}

/// Client for one product-listing endpoint: paginated fetch plus delete.
///
/// Requests are issued strictly one at a time; the only suspension points
/// are the explicit pacing delays. Every request runs under the configured
/// timeout, deletes included.
pub struct AdminClient {
    client: Client,
    /// Normalized endpoint base, e.g. `https://acme.myshopify.com/admin/api/2024-07`.
    base_url: String,
    access_token: String,
    /// Products requested per page.
    page_size: u32,
    pub(crate) pacing: Pacing,
}

impl AdminClient {
    /// Creates a client for an arbitrary listing endpoint base URL.
    ///
    /// A trailing slash on `base_url` is tolerated and stripped.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidBaseUrl`] if `base_url` does not parse,
    /// or [`AdminError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(
        base_url: &str,
        access_token: &str,
        page_size: u32,
        request_timeout: Duration,
        pacing: Pacing,
    ) -> Result<Self, AdminError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        reqwest::Url::parse(&base_url).map_err(|e| AdminError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url,
            access_token: access_token.to_owned(),
            page_size,
            pacing,
        })
    }

    /// Creates a client for a store's Admin API given its domain and the API
    /// version path segment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn for_store(
        store_domain: &str,
        api_version: &str,
        access_token: &str,
        page_size: u32,
        request_timeout: Duration,
        pacing: Pacing,
    ) -> Result<Self, AdminError> {
        let base_url = format!("https://{store_domain}/admin/api/{api_version}");
        Self::new(&base_url, access_token, page_size, request_timeout, pacing)
    }

    /// Fetches one page of products, returning the decoded page and the raw
    /// `Link` header value (for [`CursorMode::LinkHeader`] callers).
    ///
    /// # Errors
    ///
    /// - [`AdminError::Http`] for transport failures and timeouts.
    /// - [`AdminError::UnexpectedStatus`] for any non-2xx response, carrying
    ///   the response body text.
    /// - [`AdminError::Deserialize`] when the body is not a products page.
    pub async fn fetch_page(
        &self,
        cursor: Option<&str>,
    ) -> Result<(ProductsPage, Option<String>), AdminError> {
        let url = self.products_url(cursor);

        let response = self
            .client
            .get(&url)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        // Read the Link header before the body consumes the response.
        let link_header = response
            .headers()
            .get(reqwest::header::LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = response.text().await?;

        if !status.is_success() {
            return Err(AdminError::UnexpectedStatus {
                status: status.as_u16(),
                url,
                body,
            });
        }

        let page =
            serde_json::from_str::<ProductsPage>(&body).map_err(|e| AdminError::Deserialize {
                context: format!("products page from {url}"),
                source: e,
            })?;

        Ok((page, link_header))
    }

    /// Deletes one product by ID. Single attempt, no retry.
    ///
    /// # Errors
    ///
    /// - [`AdminError::Http`] for transport failures and timeouts.
    /// - [`AdminError::UnexpectedStatus`] for any non-2xx response, carrying
    ///   the response body text.
    pub async fn delete_product(&self, id: i64) -> Result<(), AdminError> {
        let url = self.product_url(id);

        let response = self
            .client
            .delete(&url)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdminError::UnexpectedStatus {
                status: status.as_u16(),
                url,
                body,
            });
        }

        Ok(())
    }

    /// Builds the listing URL for the configured page size and an optional
    /// continuation cursor.
    fn products_url(&self, cursor: Option<&str>) -> String {
        let mut url = format!("{}/products.json?limit={}", self.base_url, self.page_size);
        if let Some(cursor) = cursor {
            url.push_str("&page_info=");
            url.push_str(cursor);
        }
        url
    }

    fn product_url(&self, id: i64) -> String {
        format!("{}/products/{id}.json", self.base_url)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod client_test;
