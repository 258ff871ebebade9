pub mod cleanup;
pub mod client;
pub mod dedup;
pub mod error;
pub mod pacing;
pub mod pagination;
pub mod types;

pub use cleanup::{run_cleanup, CleanupReport};
pub use client::{AdminClient, CatalogFetch, CursorMode};
pub use dedup::{plan_removals, DuplicateGroup};
pub use error::AdminError;
pub use pacing::{Pacing, RetryPolicy};
pub use types::{Product, ProductsPage};
