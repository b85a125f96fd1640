//! Test Data Builders
//!
//! Builder patterns for constructing events and histories with sensible
//! defaults. Tests set only the fields they care about.

use chrono::{DateTime, Utc};
use core_kernel::{ExpenseId, IncomeId, Money, ParticipantId, TransferId};
use domain_ledger::{Expense, Income, LedgerSnapshot, Participant, Transfer, PARTICIPANT_PALETTE};
use fake::faker::name::en::FirstName;
use fake::Fake;
use rust_decimal::Decimal;

use crate::fixtures::{MoneyFixtures, ParticipantFixtures, TemporalFixtures};

/// Builder for constructing test participants
pub struct TestParticipantBuilder {
    id: ParticipantId,
    name: String,
    emoji: Option<String>,
    color: String,
}

impl Default for TestParticipantBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestParticipantBuilder {
    /// Creates a builder with a random first name and the first palette colour
    pub fn new() -> Self {
        Self {
            id: ParticipantId::new(),
            name: FirstName().fake(),
            emoji: None,
            color: PARTICIPANT_PALETTE[0].to_string(),
        }
    }

    pub fn with_id(mut self, id: ParticipantId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn build(self) -> Participant {
        Participant {
            id: self.id,
            name: self.name,
            emoji: self.emoji,
            color: self.color,
        }
    }
}

/// Builder for constructing test expenses
pub struct TestExpenseBuilder {
    id: ExpenseId,
    title: String,
    amount: Money,
    payer_id: ParticipantId,
    created_at: DateTime<Utc>,
}

impl Default for TestExpenseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestExpenseBuilder {
    /// Creates a builder for a 100.00 expense paid by Alice
    pub fn new() -> Self {
        Self {
            id: ExpenseId::new(),
            title: "Groceries".to_string(),
            amount: MoneyFixtures::hundred(),
            payer_id: ParticipantFixtures::alice().id,
            created_at: TemporalFixtures::recorded_at(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Money::new(amount);
        self
    }

    /// Sets the amount in cents
    pub fn with_cents(mut self, cents: i64) -> Self {
        self.amount = Money::from_cents(cents.into());
        self
    }

    pub fn paid_by(mut self, payer: &Participant) -> Self {
        self.payer_id = payer.id;
        self
    }

    pub fn with_payer_id(mut self, id: ParticipantId) -> Self {
        self.payer_id = id;
        self
    }

    pub fn build(self) -> Expense {
        Expense {
            id: self.id,
            title: self.title,
            amount: self.amount,
            payer_id: self.payer_id,
            created_at: self.created_at,
        }
    }
}

/// Builder for constructing test incomes
pub struct TestIncomeBuilder {
    id: IncomeId,
    title: String,
    amount: Money,
    receiver_id: ParticipantId,
    created_at: DateTime<Utc>,
}

impl Default for TestIncomeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestIncomeBuilder {
    /// Creates a builder for a 10.00 income received by Alice
    pub fn new() -> Self {
        Self {
            id: IncomeId::new(),
            title: "Refund".to_string(),
            amount: MoneyFixtures::ten(),
            receiver_id: ParticipantFixtures::alice().id,
            created_at: TemporalFixtures::recorded_at(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Money::new(amount);
        self
    }

    pub fn with_cents(mut self, cents: i64) -> Self {
        self.amount = Money::from_cents(cents.into());
        self
    }

    pub fn received_by(mut self, receiver: &Participant) -> Self {
        self.receiver_id = receiver.id;
        self
    }

    pub fn with_receiver_id(mut self, id: ParticipantId) -> Self {
        self.receiver_id = id;
        self
    }

    pub fn build(self) -> Income {
        Income {
            id: self.id,
            title: self.title,
            amount: self.amount,
            receiver_id: self.receiver_id,
            created_at: self.created_at,
        }
    }
}

/// Builder for constructing test transfers
pub struct TestTransferBuilder {
    id: TransferId,
    from_id: ParticipantId,
    to_id: ParticipantId,
    amount: Money,
    reason: Option<String>,
    created_at: DateTime<Utc>,
}

impl Default for TestTransferBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTransferBuilder {
    /// Creates a builder for a 20.00 transfer from Alice to Bob
    pub fn new() -> Self {
        Self {
            id: TransferId::new(),
            from_id: ParticipantFixtures::alice().id,
            to_id: ParticipantFixtures::bob().id,
            amount: MoneyFixtures::twenty(),
            reason: None,
            created_at: TemporalFixtures::recorded_at(),
        }
    }

    pub fn from(mut self, sender: &Participant) -> Self {
        self.from_id = sender.id;
        self
    }

    pub fn to(mut self, recipient: &Participant) -> Self {
        self.to_id = recipient.id;
        self
    }

    pub fn with_from_id(mut self, id: ParticipantId) -> Self {
        self.from_id = id;
        self
    }

    pub fn with_to_id(mut self, id: ParticipantId) -> Self {
        self.to_id = id;
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Money::new(amount);
        self
    }

    pub fn with_cents(mut self, cents: i64) -> Self {
        self.amount = Money::from_cents(cents.into());
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn build(self) -> Transfer {
        Transfer {
            id: self.id,
            from_id: self.from_id,
            to_id: self.to_id,
            amount: self.amount,
            reason: self.reason,
            created_at: self.created_at,
        }
    }
}

/// Builder for a full roster and event history
#[derive(Default)]
pub struct TestSnapshotBuilder {
    snapshot: LedgerSnapshot,
}

impl TestSnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_participants(mut self, participants: Vec<Participant>) -> Self {
        self.snapshot.participants = participants;
        self
    }

    pub fn with_expense(mut self, expense: Expense) -> Self {
        self.snapshot.expenses.push(expense);
        self
    }

    pub fn with_income(mut self, income: Income) -> Self {
        self.snapshot.incomes.push(income);
        self
    }

    pub fn with_transfer(mut self, transfer: Transfer) -> Self {
        self.snapshot.transfers.push(transfer);
        self
    }

    pub fn build(self) -> LedgerSnapshot {
        self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_expense_builder_defaults() {
        let expense = TestExpenseBuilder::new().build();
        assert_eq!(expense.amount.amount(), dec!(100.00));
        assert_eq!(expense.payer_id, ParticipantFixtures::alice().id);
    }

    #[test]
    fn test_transfer_builder_overrides() {
        let carol = ParticipantFixtures::carol();
        let transfer = TestTransferBuilder::new()
            .to(&carol)
            .with_cents(1234)
            .with_reason("Taxi")
            .build();
        assert_eq!(transfer.to_id, carol.id);
        assert_eq!(transfer.amount.amount(), dec!(12.34));
        assert_eq!(transfer.reason.as_deref(), Some("Taxi"));
    }

    #[test]
    fn test_participant_builder_generates_name() {
        let participant = TestParticipantBuilder::new().build();
        assert!(!participant.name.is_empty());
    }
}
