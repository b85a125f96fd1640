//! Transfer handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use core_kernel::TransferId;
use domain_ledger::Transfer;

use crate::dto::events::{CreateTransferRequest, UpdateTransferRequest};
use crate::{error::ApiError, extract::ApiJson, AppState};

/// Lists transfers, newest first
pub async fn list_transfers(State(state): State<AppState>) -> Json<Vec<Transfer>> {
    let book = state.book.read().await;
    Json(book.transfers().to_vec())
}

/// Records a transfer; sender and recipient must be different people
pub async fn create_transfer(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateTransferRequest>,
) -> Result<(StatusCode, Json<Transfer>), ApiError> {
    let mut book = state.book.write().await;
    let transfer = book.add_transfer(request.into())?;
    Ok((StatusCode::CREATED, Json(transfer.clone())))
}

pub async fn update_transfer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ApiJson(request): ApiJson<UpdateTransferRequest>,
) -> Result<Json<Transfer>, ApiError> {
    let mut book = state.book.write().await;
    let transfer = book.update_transfer(&TransferId::from_uuid(id), request.into())?;
    Ok(Json(transfer.clone()))
}

pub async fn remove_transfer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Transfer>, ApiError> {
    let mut book = state.book.write().await;
    Ok(Json(book.remove_transfer(&TransferId::from_uuid(id))?))
}
