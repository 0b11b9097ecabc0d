//! # Catalog Commands
//!
//! Typed dispatch for the shell. Every UI action maps to one
//! [`CatalogCommand`] variant with typed arguments; every dispatch returns a
//! full [`CommandResponse`] snapshot to re-render from.
//!
//! ## Wire Format
//! ```json
//! { "type": "deleteProduct", "id": 3 }
//! { "type": "submitForm", "input": { "name": "Pen", "price": "1.50", "category": "Office" } }
//! { "type": "goToPage", "page": 2 }
//! ```
//!
//! ```json
//! {
//!   "outcome": { "kind": "deleted", "data": true },
//!   "view": { "items": [...], "total": 5, "totalPages": 1, "currentPage": 1, ... },
//!   "editSession": { "mode": "idle" },
//!   "viewMode": "list"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;
use ts_rs::TS;

use crate::catalog::{Catalog, CatalogView};
use crate::error::CoreResult;
use crate::session::{EditSession, SubmitOutcome};
use crate::types::{ProductId, ProductInput, ViewMode};

/// An action requested by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum CatalogCommand {
    /// A keystroke in the search box.
    SetSearchText { text: String },
    /// The search timer fired.
    PollSearch,
    SubmitForm { input: ProductInput },
    CancelEdit,
    BeginEdit { id: ProductId },
    DeleteProduct { id: ProductId },
    GoToPage { page: usize },
    SetViewMode { mode: ViewMode },
}

/// What a single command did, beyond the new snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "kind", content = "data", rename_all = "camelCase")]
#[ts(export)]
pub enum CommandOutcome {
    /// Milliseconds until the shell should send `PollSearch`.
    SearchScheduled(#[ts(type = "number")] u64),
    /// Whether the pending search was committed.
    SearchPolled(bool),
    Submitted(SubmitOutcome),
    EditCancelled,
    /// Form prefill, or `None` for an unknown id.
    EditStarted(Option<ProductInput>),
    /// Whether a record was removed.
    Deleted(bool),
    /// Whether the page moved.
    PageChanged(bool),
    ViewModeChanged,
}

/// Outcome plus everything the shell needs to re-render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CommandResponse {
    pub outcome: CommandOutcome,
    pub view: CatalogView,
    pub edit_session: EditSession,
    pub view_mode: ViewMode,
}

impl Catalog {
    /// Runs one command and snapshots the result.
    pub fn dispatch(&mut self, command: CatalogCommand, now: Instant) -> CommandResponse {
        debug!(?command, "Dispatching catalog command");

        let outcome = match command {
            CatalogCommand::SetSearchText { text } => {
                let wait = self
                    .set_search_text(&text, now)
                    .map(|deadline| deadline.saturating_duration_since(now))
                    .unwrap_or_default();
                CommandOutcome::SearchScheduled(u64::try_from(wait.as_millis()).unwrap_or(u64::MAX))
            }
            CatalogCommand::PollSearch => CommandOutcome::SearchPolled(self.poll_search(now)),
            CatalogCommand::SubmitForm { input } => CommandOutcome::Submitted(self.submit_form(&input)),
            CatalogCommand::CancelEdit => {
                self.cancel_edit();
                CommandOutcome::EditCancelled
            }
            CatalogCommand::BeginEdit { id } => CommandOutcome::EditStarted(self.begin_edit(id)),
            CatalogCommand::DeleteProduct { id } => CommandOutcome::Deleted(self.delete_product(id)),
            CatalogCommand::GoToPage { page } => CommandOutcome::PageChanged(self.go_to_page(page)),
            CatalogCommand::SetViewMode { mode } => {
                self.set_view_mode(mode);
                CommandOutcome::ViewModeChanged
            }
        };

        CommandResponse {
            outcome,
            view: self.view(),
            edit_session: self.edit_session(),
            view_mode: self.view_mode(),
        }
    }

    /// Decodes a JSON command from the shell and dispatches it.
    ///
    /// ## Errors
    /// `CoreError::InvalidCommand` if the payload does not decode.
    pub fn dispatch_json(&mut self, payload: &str, now: Instant) -> CoreResult<CommandResponse> {
        let command: CatalogCommand = serde_json::from_str(payload)?;
        Ok(self.dispatch(command, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CatalogConfig;
    use crate::error::CoreError;
    use std::time::Duration;

    #[test]
    fn test_command_wire_format() {
        let command: CatalogCommand =
            serde_json::from_str(r#"{ "type": "deleteProduct", "id": 3 }"#).unwrap();
        assert_eq!(command, CatalogCommand::DeleteProduct { id: 3 });

        let command: CatalogCommand = serde_json::from_str(
            r#"{ "type": "submitForm", "input": { "name": "Pen", "price": "1.50", "category": "Office" } }"#,
        )
        .unwrap();
        assert!(matches!(command, CatalogCommand::SubmitForm { ref input } if input.stock.is_empty()));

        let command: CatalogCommand = serde_json::from_str(r#"{ "type": "cancelEdit" }"#).unwrap();
        assert_eq!(command, CatalogCommand::CancelEdit);
    }

    #[test]
    fn test_dispatch_delete() {
        let mut catalog = Catalog::new(&CatalogConfig::default()).unwrap();
        let now = Instant::now();

        let response = catalog.dispatch(CatalogCommand::DeleteProduct { id: 1 }, now);
        assert_eq!(response.outcome, CommandOutcome::Deleted(true));
        assert_eq!(response.view.total, 5);

        let response = catalog.dispatch(CatalogCommand::DeleteProduct { id: 1 }, now);
        assert_eq!(response.outcome, CommandOutcome::Deleted(false));
        assert_eq!(response.view.total, 5);
    }

    #[test]
    fn test_dispatch_search_roundtrip() {
        let mut catalog = Catalog::new(&CatalogConfig::default()).unwrap();
        let t0 = Instant::now();

        let response = catalog.dispatch(CatalogCommand::SetSearchText { text: "Lamp".into() }, t0);
        assert_eq!(response.outcome, CommandOutcome::SearchScheduled(500));
        assert_eq!(response.view.total, 6);

        let response = catalog.dispatch(CatalogCommand::PollSearch, t0 + Duration::from_millis(500));
        assert_eq!(response.outcome, CommandOutcome::SearchPolled(true));
        assert_eq!(response.view.total, 1);
        assert_eq!(response.view.items[0].name, "Table Lamp");
    }

    #[test]
    fn test_dispatch_edit_flow() {
        let mut catalog = Catalog::new(&CatalogConfig::default()).unwrap();
        let now = Instant::now();

        let response = catalog.dispatch(CatalogCommand::BeginEdit { id: 4 }, now);
        let prefill = match response.outcome {
            CommandOutcome::EditStarted(Some(input)) => input,
            other => panic!("unexpected outcome: {:?}", other),
        };
        assert_eq!(prefill.name, "Book");
        assert_eq!(response.edit_session, EditSession::Editing(4));

        let response = catalog.dispatch(CatalogCommand::CancelEdit, now);
        assert_eq!(response.edit_session, EditSession::Idle);
    }

    #[test]
    fn test_dispatch_json() {
        let mut catalog = Catalog::new(&CatalogConfig::default()).unwrap();
        let now = Instant::now();

        let response = catalog
            .dispatch_json(r#"{ "type": "setViewMode", "mode": "card" }"#, now)
            .unwrap();
        assert_eq!(response.view_mode, ViewMode::Card);

        let err = catalog.dispatch_json(r#"{ "type": "explode" }"#, now).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCommand(_)));
    }

    #[test]
    fn test_response_serialization() {
        let mut catalog = Catalog::new(&CatalogConfig::default()).unwrap();
        let response = catalog.dispatch(CatalogCommand::GoToPage { page: 2 }, Instant::now());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["outcome"], serde_json::json!({ "kind": "pageChanged", "data": false }));
        assert_eq!(json["view"]["currentPage"], 1);
        assert_eq!(json["view"]["totalPages"], 1);
        assert_eq!(json["editSession"], serde_json::json!({ "mode": "idle" }));
        assert_eq!(json["viewMode"], "list");
    }

    #[test]
    fn test_response_bindings() {
        let decl = CommandResponse::decl();
        assert!(decl.contains("outcome: CommandOutcome"));
        assert!(decl.contains("editSession: EditSession"));

        let decl = CommandOutcome::decl();
        assert!(decl.contains("\"searchScheduled\""));
        assert!(!decl.contains("bigint"));
    }
}
