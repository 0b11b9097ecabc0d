//! # Edit Session
//!
//! Tracks which record the form is bound to and routes a submission to
//! the right store mutation.
//!
//! ## Submit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit(input)                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_product(input) ── errors? ──► Rejected(errors)   (no mutation,  │
//! │       │                                                  session kept)  │
//! │       ▼ ProductData                                                     │
//! │  session?                                                               │
//! │   ├── Idle         ──► store.add(data)          ──► Created(product)   │
//! │   └── Editing(id)  ──► store.update(id, patch)  ──► Updated(product)   │
//! │                              └── not found      ──► Stale(id)          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  session = Idle                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

use crate::store::RecordStore;
use crate::types::{Product, ProductId, ProductInput, ProductPatch};
use crate::validation::{parse_product, ValidationErrors};

/// The form's binding: creating a new record, or editing an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(tag = "mode", content = "productId", rename_all = "camelCase")]
#[ts(export)]
pub enum EditSession {
    /// Form is in "create" mode.
    #[default]
    Idle,
    /// Form is bound to this record.
    Editing(ProductId),
}

/// What a submission did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "status", content = "data", rename_all = "camelCase")]
#[ts(export)]
pub enum SubmitOutcome {
    /// A new record was stored.
    Created(Product),
    /// The edited record was merged.
    Updated(Product),
    /// Validation failed; nothing changed.
    Rejected(ValidationErrors),
    /// The edited record no longer exists; nothing changed.
    Stale(ProductId),
}

impl SubmitOutcome {
    /// True if the store was mutated.
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_) | SubmitOutcome::Updated(_))
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            SubmitOutcome::Rejected(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            SubmitOutcome::Created(p) | SubmitOutcome::Updated(p) => Some(p),
            _ => None,
        }
    }
}

impl EditSession {
    /// The record being edited, if any.
    pub fn target(&self) -> Option<ProductId> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing(id) => Some(*id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing(_))
    }

    /// Binds the form to `id`, replacing any earlier target.
    pub fn begin(&mut self, id: ProductId) {
        if let EditSession::Editing(previous) = *self {
            debug!(previous, product_id = id, "Edit target replaced");
        }
        *self = EditSession::Editing(id);
    }

    /// Returns the form to "create" mode.
    pub fn cancel(&mut self) {
        *self = EditSession::Idle;
    }

    /// Clears the session if it targets a record that was just removed.
    /// Returns whether it was cleared.
    pub fn on_removed(&mut self, id: ProductId) -> bool {
        if self.target() == Some(id) {
            self.cancel();
            true
        } else {
            false
        }
    }

    /// Validates `input` and applies it to `store`.
    ///
    /// A rejected submission leaves both the store and the session as they
    /// were, so the user can fix the form. Every other outcome ends the
    /// session.
    pub fn submit(&mut self, store: &mut RecordStore, input: &ProductInput) -> SubmitOutcome {
        let data = match parse_product(input) {
            Ok(data) => data,
            Err(errors) => {
                debug!(errors = errors.len(), "Submission rejected");
                return SubmitOutcome::Rejected(errors);
            }
        };

        let outcome = match *self {
            EditSession::Idle => SubmitOutcome::Created(store.add(data)),
            EditSession::Editing(id) => match store.update(id, ProductPatch::from(data)) {
                Ok(product) => SubmitOutcome::Updated(product),
                Err(e) => {
                    warn!(product_id = id, error = %e, "Edit target is gone, submission dropped");
                    SubmitOutcome::Stale(id)
                }
            },
        };

        self.cancel();
        outcome
    }
}
