//! The `cleanup` command: fetch the store catalog, delete duplicates.

use std::time::Duration;

use shopkeep_admin::{run_cleanup, AdminClient, CursorMode, Pacing, RetryPolicy};
use shopkeep_core::AppConfig;

pub(crate) async fn run(config: &AppConfig, dry_run: bool) -> anyhow::Result<()> {
    let (store_domain, access_token) = config.store_credentials()?;

    // Store fetch runs single-attempt: a failed page ends the fetch and
    // cleanup proceeds on whatever was accumulated.
    let pacing = Pacing {
        retry: RetryPolicy::single_attempt(),
        inter_page_delay: Duration::from_millis(config.inter_page_delay_ms),
        delete_delay: Duration::from_millis(config.delete_delay_ms),
    };
    let client = AdminClient::for_store(
        store_domain,
        &config.api_version,
        access_token,
        config.page_size,
        Duration::from_secs(config.request_timeout_secs),
        pacing,
    )?;

    let fetch = client.fetch_catalog(CursorMode::LinkHeader).await;
    if let Some(err) = &fetch.failure {
        tracing::warn!(
            error = %err,
            fetched = fetch.products.len(),
            "catalog fetch ended early; cleaning up the partial list"
        );
    }
    println!("fetched {} products from {store_domain}", fetch.products.len());

    let report = run_cleanup(&client, fetch.products, dry_run).await;
    if dry_run {
        println!(
            "dry-run: {} duplicate listing(s) would be deleted",
            report.duplicates_found
        );
    } else {
        println!(
            "deleted {} of {} duplicate listing(s), {} failed",
            report.deleted, report.duplicates_found, report.failed
        );
    }

    Ok(())
}
