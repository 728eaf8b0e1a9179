//! "Similar phones" ranking for the product detail page.

use crate::catalog::Product;

/// Price distance (som, exclusive) within which two phones count as similar.
pub const SIMILAR_PRICE_WINDOW: u64 = 15_000;

/// Default number of similar phones shown on the detail page.
pub const DEFAULT_SIMILAR_LIMIT: usize = 4;

/// Up to `limit` phones similar to `target`.
///
/// A candidate shares the brand, shares the OS, or is priced within
/// [`SIMILAR_PRICE_WINDOW`] of the target. The target itself is excluded.
/// Same-brand phones rank first, then closer prices; remaining ties keep
/// catalog order.
#[must_use]
pub fn similar_to<'a>(catalog: &'a [Product], target: &Product, limit: usize) -> Vec<&'a Product> {
    let mut candidates: Vec<&Product> = catalog
        .iter()
        .filter(|p| p.id != target.id)
        .filter(|p| {
            p.brand == target.brand
                || p.os == target.os
                || p.price.distance(target.price) < SIMILAR_PRICE_WINDOW
        })
        .collect();

    candidates.sort_by_key(|p| (p.brand != target.brand, p.price.distance(target.price)));
    candidates.truncate(limit);
    candidates
}
