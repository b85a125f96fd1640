//! Ledger domain errors

use std::fmt;

use thiserror::Error;

use core_kernel::{MoneyError, ParticipantId};

/// The kind of recorded money movement, used in error messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Expense,
    Income,
    Transfer,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Expense => "Expense",
            EventKind::Income => "Income",
            EventKind::Transfer => "Transfer",
        };
        f.write_str(name)
    }
}

/// Errors raised by the finance book when an edit is rejected
///
/// The summary computation itself never fails; these only guard the
/// records before they reach it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Participant not found: {0}")]
    ParticipantNotFound(ParticipantId),

    #[error("{kind} not found: {id}")]
    EventNotFound { kind: EventKind, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Sender and recipient must be different participants")]
    SameParticipant,

    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl LedgerError {
    pub fn validation(message: impl Into<String>) -> Self {
        LedgerError::Validation(message.into())
    }

    pub fn event_not_found(kind: EventKind, id: impl fmt::Display) -> Self {
        LedgerError::EventNotFound {
            kind,
            id: id.to_string(),
        }
    }
}
