use std::time::Duration;

use super::*;
use crate::pacing::Pacing;

fn test_client(base_url: &str) -> AdminClient {
    AdminClient::new(base_url, "shpat_test", 250, Duration::from_secs(5), Pacing::none())
        .expect("test client must build")
}

#[test]
fn products_url_without_cursor() {
    let client = test_client("https://acme.myshopify.com/admin/api/2024-07");
    assert_eq!(
        client.products_url(None),
        "https://acme.myshopify.com/admin/api/2024-07/products.json?limit=250"
    );
}

#[test]
fn products_url_with_cursor() {
    let client = test_client("https://acme.myshopify.com/admin/api/2024-07");
    assert_eq!(
        client.products_url(Some("eyJsYXN0X2lkIjo0Mn0")),
        "https://acme.myshopify.com/admin/api/2024-07/products.json?limit=250&page_info=eyJsYXN0X2lkIjo0Mn0"
    );
}

#[test]
fn base_url_trailing_slash_is_stripped() {
    let client = test_client("https://supplier.example.com/api/v2/");
    assert_eq!(
        client.products_url(None),
        "https://supplier.example.com/api/v2/products.json?limit=250"
    );
}

#[test]
fn product_url_embeds_the_id() {
    let client = test_client("https://acme.myshopify.com/admin/api/2024-07");
    assert_eq!(
        client.product_url(6_789_012_345_678),
        "https://acme.myshopify.com/admin/api/2024-07/products/6789012345678.json"
    );
}

#[test]
fn for_store_builds_the_admin_base() {
    let client = AdminClient::for_store(
        "acme.myshopify.com",
        "2024-07",
        "shpat_test",
        100,
        Duration::from_secs(5),
        Pacing::none(),
    )
    .expect("store client must build");
    assert_eq!(
        client.products_url(None),
        "https://acme.myshopify.com/admin/api/2024-07/products.json?limit=100"
    );
}

#[test]
fn invalid_base_url_is_rejected() {
    let result = AdminClient::new(
        "not a url",
        "shpat_test",
        250,
        Duration::from_secs(5),
        Pacing::none(),
    );
    assert!(
        matches!(result, Err(AdminError::InvalidBaseUrl { .. })),
        "expected InvalidBaseUrl, got: {:?}",
        result.err()
    );
}
