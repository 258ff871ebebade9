//! Duplicate detection: group fetched products by handle and decide which
//! listing survives.
//!
//! Planning is pure so the retention invariant is testable without any HTTP:
//! after applying a plan, at most one product per handle remains, and the
//! survivor is the one with the maximum `created_at` in its group.

use std::collections::{HashMap, HashSet};

use crate::types::Product;

/// Drops repeated product IDs, keeping the first occurrence of each.
///
/// A paginated listing can hand back the same product on two pages when the
/// catalog shifts underneath the cursor; counting such a product twice would
/// inflate the duplicate report and could schedule a second delete for an
/// already-deleted ID.
#[must_use]
pub fn dedup_by_id(products: Vec<Product>) -> Vec<Product> {
    let mut seen: HashSet<i64> = HashSet::with_capacity(products.len());
    products.into_iter().filter(|p| seen.insert(p.id)).collect()
}

/// One handle with more than one listing: the product to keep and the
/// products scheduled for deletion.
#[derive(Debug, Clone)]
pub struct DuplicateGroup {
    pub handle: String,
    /// The newest listing in the group (maximum `created_at`; on a tie, the
    /// one fetched first).
    pub keep: Product,
    /// Every other listing in the group, newest first.
    pub delete: Vec<Product>,
}

impl DuplicateGroup {
    #[must_use]
    pub fn delete_count(&self) -> usize {
        self.delete.len()
    }
}

/// Builds the removal plan for a fetched catalog.
///
/// Products are de-duplicated by `id` first, then grouped by `handle` in
/// fetch order. Each group is stable-sorted by `created_at` descending, so
/// ties keep their original relative order and the earliest-fetched of the
/// newest products survives. Groups of size one produce no plan entry.
#[must_use]
pub fn plan_removals(products: Vec<Product>) -> Vec<DuplicateGroup> {
    let products = dedup_by_id(products);

    let mut handle_order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<Product>> = HashMap::new();

    for product in products {
        let group = groups.entry(product.handle.clone()).or_insert_with(|| {
            handle_order.push(product.handle.clone());
            Vec::new()
        });
        group.push(product);
    }

    let mut plan = Vec::new();
    for handle in handle_order {
        let Some(mut group) = groups.remove(&handle) else {
            continue;
        };
        if group.len() < 2 {
            continue;
        }
        group.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let keep = group.remove(0);
        plan.push(DuplicateGroup {
            handle,
            keep,
            delete: group,
        });
    }

    plan
}
