//! Participant DTOs

use serde::Deserialize;

use domain_ledger::ParticipantUpdate;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParticipantRequest {
    pub name: String,
    pub emoji: Option<String>,
}

/// Partial update; absent fields are left unchanged
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParticipantRequest {
    pub name: Option<String>,
    pub emoji: Option<String>,
    pub color: Option<String>,
}

impl From<UpdateParticipantRequest> for ParticipantUpdate {
    fn from(request: UpdateParticipantRequest) -> Self {
        ParticipantUpdate {
            name: request.name,
            emoji: request.emoji,
            color: request.color,
        }
    }
}
