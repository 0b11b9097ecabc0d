//! # catalog-core: Catalog State Engine
//!
//! The state behind a product catalog screen: the records, the search box,
//! the page cursor and the add/edit form. Pure data in, pure data out.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI Shell (not in this crate)                 │   │
//! │  │    table / cards ◄── CatalogView     DOM events ──► Command     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ dispatch()                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   store   │  │   query   │  │ debounce  │  │ validation│  │   │
//! │  │   │  records  │  │  filter + │  │  search   │  │   form    │  │   │
//! │  │   │  ids      │  │  paginate │  │  commits  │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │              ┌─────────────┐  ┌─────────────┐                  │   │
//! │  │              │   session   │  │   catalog   │                  │   │
//! │  │              │ edit target │  │   facade    │                  │   │
//! │  │              └─────────────┘  └─────────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DOM • NO TIMERS • NO GLOBALS                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, form input, patches, view mode
//! - [`money`] - Integer-cent prices
//! - [`store`] - Record store and id assignment
//! - [`query`] - Filtering and pagination
//! - [`debounce`] - Deferred search commits
//! - [`validation`] - Form rules
//! - [`session`] - Edit session and submit routing
//! - [`catalog`] - The instance the shell holds
//! - [`command`] - Typed command dispatch
//! - [`config`] - Page size, debounce, startup view
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use catalog_core::{Catalog, CatalogConfig};
//!
//! let mut catalog = Catalog::new(&CatalogConfig::default())?;
//! assert_eq!(catalog.view().items.len(), 6);
//!
//! let t0 = Instant::now();
//! catalog.set_search_text("shirt", t0);
//! catalog.poll_search(t0 + Duration::from_millis(500));
//!
//! let view = catalog.view();
//! assert_eq!(view.total, 1);
//! assert_eq!(view.items[0].name, "T-Shirt");
//! # Ok::<(), catalog_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod command;
pub mod config;
pub mod debounce;
pub mod error;
pub mod money;
pub mod query;
pub mod seed;
pub mod session;
pub mod store;
pub mod telemetry;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{Catalog, CatalogView, ShowingRange};
pub use command::{CatalogCommand, CommandOutcome, CommandResponse};
pub use config::CatalogConfig;
pub use error::{CoreError, CoreResult, FieldError};
pub use money::Money;
pub use query::{query, QueryResult, QueryState};
pub use session::{EditSession, SubmitOutcome};
pub use store::RecordStore;
pub use types::*;
pub use validation::{validate, Field, ValidationErrors};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Records per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Quiet period before a search commits, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u64 = 500;
