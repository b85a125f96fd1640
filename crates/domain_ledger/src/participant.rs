//! Participants of a shared ledger

use serde::{Deserialize, Serialize};

use core_kernel::ParticipantId;

/// Display colours handed out to new participants, in order
pub const PARTICIPANT_PALETTE: [&str; 6] = [
    "#38bdf8", "#ec4899", "#f97316", "#22c55e", "#a855f7", "#facc15",
];

/// A named party in the shared ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// Decorative marker shown next to the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// Hex display colour
    pub color: String,
}

impl Participant {
    /// Creates a participant with a fresh identifier
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new_v7(),
            name: name.into(),
            emoji: None,
            color: color.into(),
        }
    }

    pub fn with_id(mut self, id: ParticipantId) -> Self {
        self.id = id;
        self
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }
}

/// Picks the display colour for the next participant
///
/// Returns the first palette colour nobody uses yet. Once every colour is
/// taken the palette is cycled by roster size.
pub fn pick_color(existing: &[Participant]) -> &'static str {
    PARTICIPANT_PALETTE
        .iter()
        .find(|color| !existing.iter().any(|p| p.color == **color))
        .copied()
        .unwrap_or(PARTICIPANT_PALETTE[existing.len() % PARTICIPANT_PALETTE.len()])
}
