//! Whole-book handlers

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use domain_ledger::{FinanceBook, LedgerSnapshot};

use crate::{extract::ApiJson, AppState};

/// Exports the book as a snapshot
pub async fn export_book(State(state): State<AppState>) -> Json<LedgerSnapshot> {
    let book = state.book.read().await;
    Json(book.snapshot())
}

/// Replaces the book with an imported snapshot
///
/// The import is taken as-is; events that name unknown participants are kept.
pub async fn replace_book(
    State(state): State<AppState>,
    ApiJson(snapshot): ApiJson<LedgerSnapshot>,
) -> Json<LedgerSnapshot> {
    let mut book = state.book.write().await;
    *book = FinanceBook::from_snapshot(snapshot);
    info!(participants = book.participants().len(), "replaced finance book");
    Json(book.snapshot())
}

/// Clears the roster and every event
pub async fn reset_book(State(state): State<AppState>) -> StatusCode {
    state.book.write().await.reset_all();
    StatusCode::NO_CONTENT
}
