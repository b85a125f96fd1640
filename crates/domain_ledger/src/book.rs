//! The finance book
//!
//! An in-memory owner of the roster and the three event lists. It is the
//! collaborator that validates records before they reach the summary:
//!
//! - titles and names must be non-empty after trimming
//! - amounts must be strictly positive once rounded to cents, and fit in `i64` cents
//! - payers, receivers, senders and recipients must be on the roster
//! - a transfer's sender and recipient must differ
//!
//! Removing a participant also removes every event that references them.
//! New events are kept newest first.

use rust_decimal::Decimal;
use tracing::{debug, info};

use core_kernel::{ExpenseId, IncomeId, Money, ParticipantId, TransferId};

use crate::error::{EventKind, LedgerError};
use crate::event::{Expense, Income, Transfer};
use crate::participant::{pick_color, Participant};
use crate::summary::{FinanceSummary, LedgerSnapshot};

/// Fields for a new expense
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub title: String,
    pub amount: Decimal,
    pub payer_id: ParticipantId,
}

/// Partial update of an expense; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub title: Option<String>,
    pub amount: Option<Decimal>,
    pub payer_id: Option<ParticipantId>,
}

/// Fields for a new income
#[derive(Debug, Clone)]
pub struct NewIncome {
    pub title: String,
    pub amount: Decimal,
    pub receiver_id: ParticipantId,
}

/// Partial update of an income
#[derive(Debug, Clone, Default)]
pub struct IncomeUpdate {
    pub title: Option<String>,
    pub amount: Option<Decimal>,
    pub receiver_id: Option<ParticipantId>,
}

/// Fields for a new transfer
#[derive(Debug, Clone)]
pub struct NewTransfer {
    pub from_id: ParticipantId,
    pub to_id: ParticipantId,
    pub amount: Decimal,
    pub reason: Option<String>,
}

/// Partial update of a transfer
///
/// A blank `reason` clears it.
#[derive(Debug, Clone, Default)]
pub struct TransferUpdate {
    pub from_id: Option<ParticipantId>,
    pub to_id: Option<ParticipantId>,
    pub amount: Option<Decimal>,
    pub reason: Option<String>,
}

/// Partial update of a participant
///
/// A blank `emoji` clears it.
#[derive(Debug, Clone, Default)]
pub struct ParticipantUpdate {
    pub name: Option<String>,
    pub emoji: Option<String>,
    pub color: Option<String>,
}

/// The roster and event history of one group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinanceBook {
    participants: Vec<Participant>,
    expenses: Vec<Expense>,
    incomes: Vec<Income>,
    transfers: Vec<Transfer>,
}

impl FinanceBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a book from a snapshot as-is
    ///
    /// Records are not re-validated; events pointing at unknown participants
    /// are kept and handled by the summary's skip rule.
    pub fn from_snapshot(snapshot: LedgerSnapshot) -> Self {
        Self {
            participants: snapshot.participants,
            expenses: snapshot.expenses,
            incomes: snapshot.incomes,
            transfers: snapshot.transfers,
        }
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            participants: self.participants.clone(),
            expenses: self.expenses.clone(),
            incomes: self.incomes.clone(),
            transfers: self.transfers.clone(),
        }
    }

    /// Recomputes the summary from the current history
    pub fn summary(&self) -> FinanceSummary {
        crate::summary::compute_summary(
            &self.participants,
            &self.expenses,
            &self.incomes,
            &self.transfers,
        )
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn incomes(&self) -> &[Income] {
        &self.incomes
    }

    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    /// True when anything has been recorded
    pub fn has_data(&self) -> bool {
        !self.participants.is_empty()
            || !self.expenses.is_empty()
            || !self.incomes.is_empty()
            || !self.transfers.is_empty()
    }

    /// Clears the roster and every event
    pub fn reset_all(&mut self) {
        info!("resetting finance book");
        *self = Self::default();
    }

    // ------------------------------------------------------------------
    // Participants
    // ------------------------------------------------------------------

    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == *id)
    }

    /// Adds a participant with the next free palette colour
    pub fn add_participant(
        &mut self,
        name: &str,
        emoji: Option<&str>,
    ) -> Result<&Participant, LedgerError> {
        let name = required_text(name, "name")?;
        let mut participant = Participant::new(name, pick_color(&self.participants));
        participant.emoji = optional_text(emoji);

        debug!(participant_id = %participant.id, "adding participant");
        self.participants.push(participant);
        Ok(&self.participants[self.participants.len() - 1])
    }

    pub fn update_participant(
        &mut self,
        id: &ParticipantId,
        update: ParticipantUpdate,
    ) -> Result<&Participant, LedgerError> {
        let name = update
            .name
            .as_deref()
            .map(|n| required_text(n, "name"))
            .transpose()?;

        let participant = self
            .participants
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or(LedgerError::ParticipantNotFound(*id))?;

        if let Some(name) = name {
            participant.name = name;
        }
        if let Some(emoji) = update.emoji {
            participant.emoji = optional_text(Some(emoji.as_str()));
        }
        if let Some(color) = update.color {
            participant.color = color;
        }
        Ok(participant)
    }

    /// Removes a participant together with every event that references them
    pub fn remove_participant(&mut self, id: &ParticipantId) -> Result<Participant, LedgerError> {
        let index = self
            .participants
            .iter()
            .position(|p| p.id == *id)
            .ok_or(LedgerError::ParticipantNotFound(*id))?;
        let removed = self.participants.remove(index);

        let before = self.expenses.len() + self.incomes.len() + self.transfers.len();
        self.expenses.retain(|e| e.payer_id != *id);
        self.incomes.retain(|i| i.receiver_id != *id);
        self.transfers.retain(|t| t.from_id != *id && t.to_id != *id);
        let after = self.expenses.len() + self.incomes.len() + self.transfers.len();

        info!(
            participant_id = %id,
            cascaded_events = before - after,
            "removed participant"
        );
        Ok(removed)
    }

    // ------------------------------------------------------------------
    // Expenses
    // ------------------------------------------------------------------

    pub fn add_expense(&mut self, input: NewExpense) -> Result<&Expense, LedgerError> {
        let title = required_text(&input.title, "title")?;
        let amount = Money::positive(input.amount)?;
        self.require_participant(&input.payer_id)?;

        let expense = Expense::new(title, amount, input.payer_id);
        debug!(expense_id = %expense.id, %amount, "recording expense");
        self.expenses.insert(0, expense);
        Ok(&self.expenses[0])
    }

    pub fn update_expense(
        &mut self,
        id: &ExpenseId,
        update: ExpenseUpdate,
    ) -> Result<&Expense, LedgerError> {
        let title = update
            .title
            .as_deref()
            .map(|t| required_text(t, "title"))
            .transpose()?;
        let amount = update.amount.map(Money::positive).transpose()?;
        if let Some(payer_id) = &update.payer_id {
            self.require_participant(payer_id)?;
        }

        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == *id)
            .ok_or_else(|| LedgerError::event_not_found(EventKind::Expense, id))?;

        if let Some(title) = title {
            expense.title = title;
        }
        if let Some(amount) = amount {
            expense.amount = amount;
        }
        if let Some(payer_id) = update.payer_id {
            expense.payer_id = payer_id;
        }
        Ok(expense)
    }

    pub fn remove_expense(&mut self, id: &ExpenseId) -> Result<Expense, LedgerError> {
        let index = self
            .expenses
            .iter()
            .position(|e| e.id == *id)
            .ok_or_else(|| LedgerError::event_not_found(EventKind::Expense, id))?;
        Ok(self.expenses.remove(index))
    }

    // ------------------------------------------------------------------
    // Incomes
    // ------------------------------------------------------------------

    pub fn add_income(&mut self, input: NewIncome) -> Result<&Income, LedgerError> {
        let title = required_text(&input.title, "title")?;
        let amount = Money::positive(input.amount)?;
        self.require_participant(&input.receiver_id)?;

        let income = Income::new(title, amount, input.receiver_id);
        debug!(income_id = %income.id, %amount, "recording income");
        self.incomes.insert(0, income);
        Ok(&self.incomes[0])
    }

    pub fn update_income(
        &mut self,
        id: &IncomeId,
        update: IncomeUpdate,
    ) -> Result<&Income, LedgerError> {
        let title = update
            .title
            .as_deref()
            .map(|t| required_text(t, "title"))
            .transpose()?;
        let amount = update.amount.map(Money::positive).transpose()?;
        if let Some(receiver_id) = &update.receiver_id {
            self.require_participant(receiver_id)?;
        }

        let income = self
            .incomes
            .iter_mut()
            .find(|i| i.id == *id)
            .ok_or_else(|| LedgerError::event_not_found(EventKind::Income, id))?;

        if let Some(title) = title {
            income.title = title;
        }
        if let Some(amount) = amount {
            income.amount = amount;
        }
        if let Some(receiver_id) = update.receiver_id {
            income.receiver_id = receiver_id;
        }
        Ok(income)
    }

    pub fn remove_income(&mut self, id: &IncomeId) -> Result<Income, LedgerError> {
        let index = self
            .incomes
            .iter()
            .position(|i| i.id == *id)
            .ok_or_else(|| LedgerError::event_not_found(EventKind::Income, id))?;
        Ok(self.incomes.remove(index))
    }

    // ------------------------------------------------------------------
    // Transfers
    // ------------------------------------------------------------------

    pub fn add_transfer(&mut self, input: NewTransfer) -> Result<&Transfer, LedgerError> {
        let amount = Money::positive(input.amount)?;
        self.require_pair(&input.from_id, &input.to_id)?;

        let mut transfer = Transfer::new(input.from_id, input.to_id, amount);
        transfer.reason = optional_text(input.reason.as_deref());
        debug!(transfer_id = %transfer.id, %amount, "recording transfer");
        self.transfers.insert(0, transfer);
        Ok(&self.transfers[0])
    }

    pub fn update_transfer(
        &mut self,
        id: &TransferId,
        update: TransferUpdate,
    ) -> Result<&Transfer, LedgerError> {
        let amount = update.amount.map(Money::positive).transpose()?;

        let current = self
            .transfers
            .iter()
            .find(|t| t.id == *id)
            .ok_or_else(|| LedgerError::event_not_found(EventKind::Transfer, id))?;
        let from_id = update.from_id.unwrap_or(current.from_id);
        let to_id = update.to_id.unwrap_or(current.to_id);
        if update.from_id.is_some() || update.to_id.is_some() {
            self.require_pair(&from_id, &to_id)?;
        }

        let transfer = self
            .transfers
            .iter_mut()
            .find(|t| t.id == *id)
            .ok_or_else(|| LedgerError::event_not_found(EventKind::Transfer, id))?;

        transfer.from_id = from_id;
        transfer.to_id = to_id;
        if let Some(amount) = amount {
            transfer.amount = amount;
        }
        if let Some(reason) = update.reason {
            transfer.reason = optional_text(Some(reason.as_str()));
        }
        Ok(transfer)
    }

    pub fn remove_transfer(&mut self, id: &TransferId) -> Result<Transfer, LedgerError> {
        let index = self
            .transfers
            .iter()
            .position(|t| t.id == *id)
            .ok_or_else(|| LedgerError::event_not_found(EventKind::Transfer, id))?;
        Ok(self.transfers.remove(index))
    }

    // ------------------------------------------------------------------
    // Validation helpers
    // ------------------------------------------------------------------

    fn require_participant(&self, id: &ParticipantId) -> Result<(), LedgerError> {
        self.participant(id)
            .map(|_| ())
            .ok_or(LedgerError::ParticipantNotFound(*id))
    }

    fn require_pair(&self, from_id: &ParticipantId, to_id: &ParticipantId) -> Result<(), LedgerError> {
        if from_id == to_id {
            return Err(LedgerError::SameParticipant);
        }
        self.require_participant(from_id)?;
        self.require_participant(to_id)
    }
}

fn required_text(value: &str, field: &str) -> Result<String, LedgerError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
