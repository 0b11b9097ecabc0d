//! # Catalog
//!
//! One explicit catalog instance: the record store plus the query, search
//! and edit state layered over it. The shell constructs it, keeps it, and
//! renders the [`CatalogView`] it hands back.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shell Event          Catalog Method          State Change              │
//! │  ───────────          ──────────────          ────────────              │
//! │                                                                         │
//! │  Type in search ────► set_search_text() ────► debouncer reschedules    │
//! │  Timer fires ───────► poll_search() ────────► search_text, page = 1    │
//! │  Submit form ───────► submit_form() ────────► add / update, Idle       │
//! │  Click Edit ────────► begin_edit() ─────────► Editing(id), prefill     │
//! │  Click Cancel ──────► cancel_edit() ────────► Idle                     │
//! │  Click Delete ──────► delete_product() ─────► remove, maybe Idle       │
//! │  Click page n ──────► go_to_page() ─────────► page = n if in range     │
//! │  Toggle layout ─────► set_view_mode() ──────► view_mode                │
//! │                                                                         │
//! │  After every mutation the current page is re-checked: if it points     │
//! │  past the last page, it goes back to 1.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};
use ts_rs::TS;

use crate::config::CatalogConfig;
use crate::debounce::SearchDebouncer;
use crate::error::CoreResult;
use crate::query::QueryState;
use crate::seed::sample_catalog;
use crate::session::{EditSession, SubmitOutcome};
use crate::store::RecordStore;
use crate::types::{Product, ProductId, ProductInput, ViewMode};

// =============================================================================
// Catalog View
// =============================================================================

/// 1-based inclusive range of the records on screen ("Showing 7-12 of 13").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ShowingRange {
    pub start: usize,
    pub end: usize,
}

/// The derived view the shell renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogView {
    pub items: Vec<Product>,
    pub total: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// `None` when nothing is on screen.
    pub showing: Option<ShowingRange>,
}

// =============================================================================
// Catalog
// =============================================================================

#[derive(Debug, Clone)]
pub struct Catalog {
    store: RecordStore,
    query: QueryState,
    debouncer: SearchDebouncer,
    session: EditSession,
    view_mode: ViewMode,
}

impl Catalog {
    /// Creates a catalog, seeded with the sample products if configured.
    ///
    /// ## Errors
    /// `CoreError::InvalidConfig` if `config` fails [`CatalogConfig::validate`].
    pub fn new(config: &CatalogConfig) -> CoreResult<Self> {
        let store = if config.seed_sample_data {
            sample_catalog()
        } else {
            RecordStore::new()
        };
        Self::with_store(config, store)
    }

    /// Creates a catalog over an existing store.
    pub fn with_store(config: &CatalogConfig, store: RecordStore) -> CoreResult<Self> {
        config.validate()?;
        info!(
            products = store.len(),
            page_size = config.page_size,
            "Catalog initialized"
        );
        Ok(Catalog {
            store,
            query: QueryState::new(config.page_size),
            debouncer: SearchDebouncer::new(config.search_debounce()),
            session: EditSession::Idle,
            view_mode: config.default_view,
        })
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Feeds a keystroke's worth of search text. Nothing is filtered until
    /// the quiet period passes; returns the new commit deadline.
    pub fn set_search_text(&mut self, raw: &str, now: Instant) -> Option<Instant> {
        self.debouncer.on_input(raw, now);
        self.debouncer.deadline()
    }

    /// Commits the pending search if it is due. Returns whether a commit
    /// happened. A commit always resets the page to 1.
    pub fn poll_search(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(text) => {
                debug!(search = %text, "Search committed");
                self.query.search_text = text;
                self.query.page = 1;
                true
            }
            None => false,
        }
    }

    /// When the pending search commit is due, if one is pending.
    pub fn search_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    // =========================================================================
    // Form / Edit Session
    // =========================================================================

    /// Validates and saves the form. See [`EditSession::submit`].
    pub fn submit_form(&mut self, input: &ProductInput) -> SubmitOutcome {
        let outcome = self.session.submit(&mut self.store, input);
        if outcome.is_saved() {
            self.revalidate_page();
        }
        outcome
    }

    /// Binds the form to `id` and returns the values to prefill it with.
    /// Unknown ids are ignored and leave the session untouched.
    pub fn begin_edit(&mut self, id: ProductId) -> Option<ProductInput> {
        let prefill = self.store.get(id).map(ProductInput::from_product)?;
        self.session.begin(id);
        debug!(product_id = id, "Editing product");
        Some(prefill)
    }

    pub fn cancel_edit(&mut self) {
        self.session.cancel();
    }

    pub fn edit_session(&self) -> EditSession {
        self.session
    }

    // =========================================================================
    // Records
    // =========================================================================

    /// Deletes a record. Idempotent; ends an edit of that record.
    pub fn delete_product(&mut self, id: ProductId) -> bool {
        let removed = self.store.remove(id);
        if removed {
            if self.session.on_removed(id) {
                debug!(product_id = id, "Edit session ended by delete");
            }
            self.revalidate_page();
        }
        removed
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    // =========================================================================
    // Pagination / View
    // =========================================================================

    /// Moves to `target` if `1 <= target <= total_pages` for the current
    /// search. Anything else is a no-op. Returns whether the page changed
    /// hands.
    pub fn go_to_page(&mut self, target: usize) -> bool {
        let total_pages = self.query.total_pages(self.store.list());
        if target >= 1 && target <= total_pages {
            self.query.page = target;
            true
        } else {
            debug!(target, total_pages, "Page request out of range, ignored");
            false
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn query_state(&self) -> &QueryState {
        &self.query
    }

    /// Derives the current page.
    pub fn view(&self) -> CatalogView {
        let result = self.query.run(self.store.list());
        let page = self.query.page;

        let showing = if result.items.is_empty() {
            None
        } else {
            let start = (page - 1) * self.query.page_size + 1;
            Some(ShowingRange {
                start,
                end: start + result.items.len() - 1,
            })
        };

        CatalogView {
            has_previous: page > 1 && page <= result.total_pages,
            has_next: page < result.total_pages,
            items: result.items,
            total: result.total,
            total_pages: result.total_pages,
            current_page: page,
            showing,
        }
    }

    /// Sends the page back to 1 if a mutation left it past the last page.
    fn revalidate_page(&mut self) {
        let total_pages = self.query.total_pages(self.store.list());
        if self.query.page > total_pages.max(1) {
            debug!(
                page = self.query.page,
                total_pages, "Current page no longer exists, back to page 1"
            );
            self.query.page = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use std::time::Duration;

    fn empty_catalog() -> Catalog {
        let config = CatalogConfig {
            seed_sample_data: false,
            ..CatalogConfig::default()
        };
        Catalog::new(&config).unwrap()
    }

    fn form(name: &str) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            price: "1.00".to_string(),
            category: "Misc".to_string(),
            ..ProductInput::default()
        }
    }

    fn fill(catalog: &mut Catalog, n: usize) {
        for i in 0..n {
            assert!(catalog.submit_form(&form(&format!("Item {}", i))).is_saved());
        }
    }

    #[test]
    fn test_rejects_zero_page_size() {
        let config = CatalogConfig {
            page_size: 0,
            ..CatalogConfig::default()
        };
        assert!(matches!(
            Catalog::new(&config),
            Err(CoreError::InvalidConfig(_))
        ));
        assert!(Catalog::with_store(&config, RecordStore::new()).is_err());
    }

    #[test]
    fn test_seeded_catalog_view() {
        let catalog = Catalog::new(&CatalogConfig::default()).unwrap();
        let view = catalog.view();
        assert_eq!(view.items.len(), 6);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.current_page, 1);
        assert!(!view.has_previous);
        assert!(!view.has_next);
        assert_eq!(view.showing, Some(ShowingRange { start: 1, end: 6 }));
    }

    #[test]
    fn test_empty_catalog_view() {
        let view = empty_catalog().view();
        assert!(view.items.is_empty());
        assert_eq!(view.total, 0);
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.showing, None);
    }

    #[test]
    fn test_go_to_page_bounds() {
        let mut catalog = empty_catalog();
        fill(&mut catalog, 13);

        assert!(!catalog.go_to_page(0));
        assert!(!catalog.go_to_page(4));
        assert_eq!(catalog.view().current_page, 1);

        assert!(catalog.go_to_page(3));
        let view = catalog.view();
        assert_eq!(view.current_page, 3);
        assert_eq!(view.items.len(), 1);
        assert!(view.has_previous);
        assert!(!view.has_next);
        assert_eq!(view.showing, Some(ShowingRange { start: 13, end: 13 }));
    }

    #[test]
    fn test_delete_on_last_page_resets_page() {
        let mut catalog = empty_catalog();
        fill(&mut catalog, 7);
        assert!(catalog.go_to_page(2));

        assert!(catalog.delete_product(7));
        let view = catalog.view();
        assert_eq!(view.current_page, 1);
        assert_eq!(view.items.len(), 6);
    }

    #[test]
    fn test_delete_keeps_valid_page() {
        let mut catalog = empty_catalog();
        fill(&mut catalog, 13);
        assert!(catalog.go_to_page(2));

        assert!(catalog.delete_product(1));
        assert_eq!(catalog.view().current_page, 2);
    }

    #[test]
    fn test_update_that_shrinks_filter_resets_page() {
        let mut catalog = empty_catalog();
        fill(&mut catalog, 7);
        let t0 = Instant::now();
        catalog.set_search_text("item", t0);
        assert!(catalog.poll_search(t0 + Duration::from_millis(500)));
        assert!(catalog.go_to_page(2));

        catalog.begin_edit(7).unwrap();
        assert!(catalog.submit_form(&form("Renamed")).is_saved());
        assert_eq!(catalog.view().current_page, 1);
        assert_eq!(catalog.view().total, 6);
    }

    #[test]
    fn test_delete_edited_record_clears_session() {
        let mut catalog = Catalog::new(&CatalogConfig::default()).unwrap();
        catalog.begin_edit(3).unwrap();

        assert!(catalog.delete_product(2));
        assert_eq!(catalog.edit_session(), EditSession::Editing(3));

        assert!(catalog.delete_product(3));
        assert_eq!(catalog.edit_session(), EditSession::Idle);
        assert!(!catalog.delete_product(3));
    }

    #[test]
    fn test_begin_edit_unknown_id_is_noop() {
        let mut catalog = Catalog::new(&CatalogConfig::default()).unwrap();
        catalog.begin_edit(1).unwrap();
        assert!(catalog.begin_edit(99).is_none());
        assert_eq!(catalog.edit_session(), EditSession::Editing(1));
    }

    #[test]
    fn test_search_commit_resets_page() {
        let mut catalog = empty_catalog();
        fill(&mut catalog, 13);
        assert!(catalog.go_to_page(3));

        let t0 = Instant::now();
        let deadline = catalog.set_search_text(" ITEM 1", t0).unwrap();
        assert_eq!(catalog.search_deadline(), Some(deadline));
        assert!(!catalog.poll_search(t0 + Duration::from_millis(499)));
        assert_eq!(catalog.view().current_page, 3);

        assert!(catalog.poll_search(deadline));
        assert_eq!(catalog.search_deadline(), None);
        let view = catalog.view();
        assert_eq!(catalog.query_state().search_text, "item 1");
        assert_eq!(view.current_page, 1);
        // Item 1, Item 10, Item 11, Item 12
        assert_eq!(view.total, 4);
    }

    #[test]
    fn test_view_mode_is_tracked_only() {
        let mut catalog = Catalog::new(&CatalogConfig::default()).unwrap();
        let before = catalog.view();
        catalog.set_view_mode(ViewMode::Card);
        assert_eq!(catalog.view_mode(), ViewMode::Card);
        assert_eq!(catalog.view(), before);
    }
}
