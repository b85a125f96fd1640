//! Income handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use core_kernel::IncomeId;
use domain_ledger::Income;

use crate::dto::events::{CreateIncomeRequest, UpdateIncomeRequest};
use crate::{error::ApiError, extract::ApiJson, AppState};

/// Lists incomes, newest first
pub async fn list_incomes(State(state): State<AppState>) -> Json<Vec<Income>> {
    let book = state.book.read().await;
    Json(book.incomes().to_vec())
}

pub async fn create_income(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateIncomeRequest>,
) -> Result<(StatusCode, Json<Income>), ApiError> {
    let mut book = state.book.write().await;
    let income = book.add_income(request.into())?;
    Ok((StatusCode::CREATED, Json(income.clone())))
}

pub async fn update_income(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ApiJson(request): ApiJson<UpdateIncomeRequest>,
) -> Result<Json<Income>, ApiError> {
    let mut book = state.book.write().await;
    let income = book.update_income(&IncomeId::from_uuid(id), request.into())?;
    Ok(Json(income.clone()))
}

pub async fn remove_income(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Income>, ApiError> {
    let mut book = state.book.write().await;
    Ok(Json(book.remove_income(&IncomeId::from_uuid(id))?))
}
