//! Participant handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use core_kernel::ParticipantId;
use domain_ledger::Participant;

use crate::dto::participants::*;
use crate::{error::ApiError, extract::ApiJson, AppState};

/// Lists the roster in order
pub async fn list_participants(State(state): State<AppState>) -> Json<Vec<Participant>> {
    let book = state.book.read().await;
    Json(book.participants().to_vec())
}

/// Adds a participant with the next free palette colour
pub async fn create_participant(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateParticipantRequest>,
) -> Result<(StatusCode, Json<Participant>), ApiError> {
    let mut book = state.book.write().await;
    let participant = book.add_participant(&request.name, request.emoji.as_deref())?;
    Ok((StatusCode::CREATED, Json(participant.clone())))
}

pub async fn update_participant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ApiJson(request): ApiJson<UpdateParticipantRequest>,
) -> Result<Json<Participant>, ApiError> {
    let mut book = state.book.write().await;
    let participant = book.update_participant(&ParticipantId::from_uuid(id), request.into())?;
    Ok(Json(participant.clone()))
}

/// Removes a participant and every event that references them
pub async fn remove_participant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Participant>, ApiError> {
    let mut book = state.book.write().await;
    Ok(Json(book.remove_participant(&ParticipantId::from_uuid(id))?))
}
