//! The `pull` command: page through the supplier catalog with bounded retry.

use std::time::Duration;

use shopkeep_admin::{AdminClient, CursorMode, Pacing, RetryPolicy};
use shopkeep_core::AppConfig;

pub(crate) async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let (base_url, supplier_token) = config.supplier_credentials()?;

    let pacing = Pacing {
        retry: RetryPolicy::new(
            config.retry_max_attempts,
            Duration::from_secs(config.retry_delay_secs),
        ),
        inter_page_delay: Duration::from_millis(config.inter_page_delay_ms),
        delete_delay: Duration::ZERO,
    };
    let client = AdminClient::new(
        base_url,
        supplier_token,
        config.page_size,
        Duration::from_secs(config.request_timeout_secs),
        pacing,
    )?;

    let fetch = client.fetch_catalog(CursorMode::BodyField).await;
    match &fetch.failure {
        Some(err) => {
            tracing::warn!(error = %err, "supplier pull ended early");
            println!(
                "pulled {} products from the supplier catalog (partial)",
                fetch.products.len()
            );
        }
        None => println!(
            "pulled {} products from the supplier catalog",
            fetch.products.len()
        ),
    }

    Ok(())
}
