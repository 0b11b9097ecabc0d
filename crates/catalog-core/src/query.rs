//! # Query Engine
//!
//! Derives the filtered, paginated slice of the catalog.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products (insertion order)                                            │
//! │       │                                                                 │
//! │       ▼  filter: lowercase(name) contains normalize(search)            │
//! │  filtered ──► total = len, total_pages = ceil(total / page_size)       │
//! │       │                                                                 │
//! │       ▼  slice [(page - 1) * page_size, + page_size)                   │
//! │  items   (empty when the page is out of range, never an error)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine is pure. Clamping the current page is the caller's job.

use serde::Serialize;
use ts_rs::TS;

use crate::types::Product;

/// Normalizes search text: trimmed and case-folded.
pub fn normalize_search(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// `ceil(total / page_size)`; zero when there is nothing to show.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// True if a product's name matches already-normalized search text.
///
/// Names are case-folded but not trimmed.
pub fn matches_search(product: &Product, normalized: &str) -> bool {
    normalized.is_empty() || product.name.to_lowercase().contains(normalized)
}

/// The committed search and the page cursor.
///
/// `search_text` is always normalized and `page` is always ≥ 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QueryState {
    pub search_text: String,
    pub page: usize,
    pub page_size: usize,
}

impl QueryState {
    pub fn new(page_size: usize) -> Self {
        QueryState {
            search_text: String::new(),
            page: 1,
            page_size,
        }
    }

    /// Runs the query for the current state.
    pub fn run(&self, products: &[Product]) -> QueryResult {
        query(products, &self.search_text, self.page, self.page_size)
    }

    /// Number of records matching the committed search.
    pub fn matching(&self, products: &[Product]) -> usize {
        products
            .iter()
            .filter(|p| matches_search(p, &self.search_text))
            .count()
    }

    /// Page count for the committed search.
    pub fn total_pages(&self, products: &[Product]) -> usize {
        page_count(self.matching(products), self.page_size)
    }
}

/// One page of query output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QueryResult {
    /// Records on the requested page.
    pub items: Vec<Product>,
    /// Records matching the search, across all pages.
    pub total: usize,
    pub total_pages: usize,
}

/// Filters `products` by `search_text` and returns page `page` (1-based).
///
/// ## Example
/// ```rust
/// use catalog_core::query::query;
/// use catalog_core::seed::sample_catalog;
///
/// let store = sample_catalog();
/// let result = query(store.list(), " SHIRT ", 1, 6);
/// assert_eq!(result.total, 1);
/// assert_eq!(result.items[0].name, "T-Shirt");
/// ```
pub fn query(products: &[Product], search_text: &str, page: usize, page_size: usize) -> QueryResult {
    let normalized = normalize_search(search_text);
    let filtered: Vec<&Product> = products
        .iter()
        .filter(|p| matches_search(p, &normalized))
        .collect();

    let total = filtered.len();
    let total_pages = page_count(total, page_size);

    let items = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size))
        .map(|start| {
            filtered
                .iter()
                .skip(start)
                .take(page_size)
                .map(|p| (*p).clone())
                .collect()
        })
        .unwrap_or_default();

    QueryResult {
        items,
        total,
        total_pages,
    }
}
