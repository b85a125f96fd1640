//! Summary handlers

use axum::{extract::State, Json};

use domain_ledger::{FinanceSummary, LedgerSnapshot};

use crate::{extract::ApiJson, AppState};

/// Computes a summary for the posted history without touching the book
pub async fn compute(
    ApiJson(snapshot): ApiJson<LedgerSnapshot>,
) -> Json<FinanceSummary> {
    Json(snapshot.summarize())
}

/// Summary of the shared book
pub async fn book_summary(State(state): State<AppState>) -> Json<FinanceSummary> {
    let book = state.book.read().await;
    Json(book.summary())
}
