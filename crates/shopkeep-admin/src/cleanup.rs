//! Executes a removal plan against the store: one delete per duplicate,
//! paced, tallied, never aborted by a single failure.

use crate::client::AdminClient;
use crate::dedup::plan_removals;
use crate::types::Product;

/// Outcome of one cleanup run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanupReport {
    /// Duplicate listings scheduled for deletion.
    pub duplicates_found: usize,
    /// Delete requests that succeeded.
    pub deleted: usize,
    /// Delete requests that failed (logged, not retried).
    pub failed: usize,
}

/// Plans and deletes duplicate listings from `products`.
///
/// For every handle with more than one listing, the newest (maximum
/// `created_at`) is kept and the rest are deleted one request at a time.
/// The delete delay is applied after every request regardless of outcome.
/// A failed delete is logged and counted; the run continues with the next
/// duplicate. Deletion is irreversible remote mutation.
///
/// With `dry_run` set, the plan is logged and returned without issuing any
/// delete request.
pub async fn run_cleanup(
    client: &AdminClient,
    products: Vec<Product>,
    dry_run: bool,
) -> CleanupReport {
    let plan = plan_removals(products);
    let duplicates_found: usize = plan.iter().map(|group| group.delete.len()).sum();

    let mut report = CleanupReport {
        duplicates_found,
        ..CleanupReport::default()
    };

    for group in &plan {
        tracing::info!(
            handle = %group.handle,
            keep_id = group.keep.id,
            duplicates = group.delete.len(),
            "duplicate handle"
        );

        for victim in &group.delete {
            if dry_run {
                tracing::info!(
                    id = victim.id,
                    handle = %group.handle,
                    title = victim.title.as_deref().unwrap_or(""),
                    "dry-run: would delete"
                );
                continue;
            }

            match client.delete_product(victim.id).await {
                Ok(()) => {
                    tracing::info!(id = victim.id, handle = %group.handle, "deleted duplicate");
                    report.deleted += 1;
                }
                Err(err) => {
                    tracing::warn!(
                        id = victim.id,
                        handle = %group.handle,
                        error = %err,
                        "delete failed, continuing with remaining duplicates"
                    );
                    report.failed += 1;
                }
            }

            if !client.pacing.delete_delay.is_zero() {
                tokio::time::sleep(client.pacing.delete_delay).await;
            }
        }
    }

    report
}
