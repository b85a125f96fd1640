//! Expense handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use core_kernel::ExpenseId;
use domain_ledger::Expense;

use crate::dto::events::{CreateExpenseRequest, UpdateExpenseRequest};
use crate::{error::ApiError, extract::ApiJson, AppState};

/// Lists expenses, newest first
pub async fn list_expenses(State(state): State<AppState>) -> Json<Vec<Expense>> {
    let book = state.book.read().await;
    Json(book.expenses().to_vec())
}

/// Records an expense at the top of the list
pub async fn create_expense(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let mut book = state.book.write().await;
    let expense = book.add_expense(request.into())?;
    Ok((StatusCode::CREATED, Json(expense.clone())))
}

pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ApiJson(request): ApiJson<UpdateExpenseRequest>,
) -> Result<Json<Expense>, ApiError> {
    let mut book = state.book.write().await;
    let expense = book.update_expense(&ExpenseId::from_uuid(id), request.into())?;
    Ok(Json(expense.clone()))
}

pub async fn remove_expense(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Expense>, ApiError> {
    let mut book = state.book.write().await;
    Ok(Json(book.remove_expense(&ExpenseId::from_uuid(id))?))
}
