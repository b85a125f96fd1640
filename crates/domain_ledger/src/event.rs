//! Recorded money movements
//!
//! Expenses and incomes are split evenly across the whole roster; transfers
//! move money between exactly two participants. All three are plain value
//! records owned by the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ExpenseId, IncomeId, Money, ParticipantId, TransferId};

/// A group cost fronted by one participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,
    pub title: String,
    pub amount: Money,
    pub payer_id: ParticipantId,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(title: impl Into<String>, amount: Money, payer_id: ParticipantId) -> Self {
        Self {
            id: ExpenseId::new_v7(),
            title: title.into(),
            amount,
            payer_id,
            created_at: Utc::now(),
        }
    }
}

/// Money received by one participant on behalf of the group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: IncomeId,
    pub title: String,
    pub amount: Money,
    pub receiver_id: ParticipantId,
    pub created_at: DateTime<Utc>,
}

impl Income {
    pub fn new(title: impl Into<String>, amount: Money, receiver_id: ParticipantId) -> Self {
        Self {
            id: IncomeId::new_v7(),
            title: title.into(),
            amount,
            receiver_id,
            created_at: Utc::now(),
        }
    }
}

/// A direct payment between two participants, outside the even split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: TransferId,
    pub from_id: ParticipantId,
    pub to_id: ParticipantId,
    pub amount: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Transfer {
    pub fn new(from_id: ParticipantId, to_id: ParticipantId, amount: Money) -> Self {
        Self {
            id: TransferId::new_v7(),
            from_id,
            to_id,
            amount,
            reason: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}
