// Engine module - pure filtering over a loaded catalog
// Sits between catalog types and CLI presentation; no I/O here

mod filter;
mod summary;

pub use filter::{FilterEngine, filter_indices, filter_products, matches_search};
pub use summary::{FilterSummary, describe_selection};

use canstore_types::{Product, Selection};

/// Filter and summarize in one pass - convenience for one-shot consumers
pub fn apply_selection<'a>(
    products: &'a [Product],
    selection: &Selection,
) -> (Vec<&'a Product>, FilterSummary) {
    let visible = filter_products(products, selection);
    let summary = FilterSummary::new(selection, visible.len(), products.len());
    (visible, summary)
}
