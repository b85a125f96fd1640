//! Ledger aggregation
//!
//! Folds the full event history into one [`LedgerEntry`] per participant.
//! Nothing is carried between calls: every aggregation starts from zeroed
//! entries and replays every event.
//!
//! # Sign convention
//!
//! A positive balance means the group owes the participant money; a negative
//! balance means the participant owes the group.
//!
//! # Dangling references
//!
//! An event may name a payer, receiver, sender or recipient who is no longer
//! on the roster. The lookup for that side comes back empty and only that
//! side's adjustment is skipped, which can leave the remaining balances not
//! summing to zero.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use core_kernel::{Cents, ParticipantId};

use crate::event::{Expense, Income, Transfer};
use crate::participant::Participant;

/// Running tally for one participant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Net position, positive when owed money by the group
    pub balance: Cents,
    /// Total fronted as payer of expenses
    pub spent: Cents,
    /// Total of this participant's shares of incomes
    pub received: Cents,
}

/// Per-participant entries produced by one aggregation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: HashMap<ParticipantId, LedgerEntry>,
}

impl Ledger {
    /// Opens a ledger with a zeroed entry for every participant
    pub fn open(participants: &[Participant]) -> Self {
        let entries = participants
            .iter()
            .map(|p| (p.id, LedgerEntry::default()))
            .collect();
        Self { entries }
    }

    /// Looks up a participant's entry
    pub fn entry(&self, id: &ParticipantId) -> Option<&LedgerEntry> {
        self.entries.get(id)
    }

    fn entry_mut(&mut self, id: &ParticipantId) -> Option<&mut LedgerEntry> {
        self.entries.get_mut(id)
    }

    /// Number of distinct participants tracked
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all balances
    ///
    /// Zero unless some event referenced a participant who is not on the roster.
    pub fn net_balance(&self) -> Cents {
        self.entries.values().map(|e| e.balance).sum()
    }

    /// Applies an expense: every participant is charged their share and the
    /// payer is credited the full amount.
    pub fn apply_expense(&mut self, participants: &[Participant], expense: &Expense) {
        let amount = expense.amount.to_cents_saturating();
        trace!(expense_id = %expense.id, %amount, "applying expense");

        for (participant, share) in Self::even_shares(participants, amount) {
            if let Some(entry) = self.entry_mut(&participant) {
                entry.balance -= share;
            }
        }

        match self.entry_mut(&expense.payer_id) {
            Some(payer) => {
                payer.balance += amount;
                payer.spent += amount;
            }
            None => debug!(
                expense_id = %expense.id,
                payer_id = %expense.payer_id,
                "expense payer is not on the roster, skipping credit"
            ),
        }
    }

    /// Applies an income: every participant is credited their share and the
    /// receiver is debited the full amount.
    pub fn apply_income(&mut self, participants: &[Participant], income: &Income) {
        let amount = income.amount.to_cents_saturating();
        trace!(income_id = %income.id, %amount, "applying income");

        for (participant, share) in Self::even_shares(participants, amount) {
            if let Some(entry) = self.entry_mut(&participant) {
                entry.balance += share;
                entry.received += share;
            }
        }

        match self.entry_mut(&income.receiver_id) {
            Some(receiver) => receiver.balance -= amount,
            None => debug!(
                income_id = %income.id,
                receiver_id = %income.receiver_id,
                "income receiver is not on the roster, skipping debit"
            ),
        }
    }

    /// Applies a transfer: the sender is credited and the recipient debited.
    /// Each side is applied on its own.
    pub fn apply_transfer(&mut self, transfer: &Transfer) {
        let amount = transfer.amount.to_cents_saturating();
        trace!(transfer_id = %transfer.id, %amount, "applying transfer");

        match self.entry_mut(&transfer.from_id) {
            Some(sender) => sender.balance += amount,
            None => debug!(
                transfer_id = %transfer.id,
                from_id = %transfer.from_id,
                "transfer sender is not on the roster, skipping credit"
            ),
        }

        match self.entry_mut(&transfer.to_id) {
            Some(recipient) => recipient.balance -= amount,
            None => debug!(
                transfer_id = %transfer.id,
                to_id = %transfer.to_id,
                "transfer recipient is not on the roster, skipping debit"
            ),
        }
    }

    /// Pairs each participant, in list order, with their share of `amount`.
    /// Empty when there is nobody to split across.
    fn even_shares(participants: &[Participant], amount: Cents) -> Vec<(ParticipantId, Cents)> {
        if participants.is_empty() {
            return Vec::new();
        }

        amount
            .allocate(participants.len())
            .map(|shares| participants.iter().map(|p| p.id).zip(shares).collect())
            .unwrap_or_default()
    }
}

/// Builds the ledger for the given roster and event history
///
/// Expenses are applied first, then incomes, then transfers. Within one event
/// the leftover cents of the split go to the leading participants in list
/// order, so the roster order is part of the result.
pub fn aggregate(
    participants: &[Participant],
    expenses: &[Expense],
    incomes: &[Income],
    transfers: &[Transfer],
) -> Ledger {
    let mut ledger = Ledger::open(participants);

    for expense in expenses {
        ledger.apply_expense(participants, expense);
    }
    for income in incomes {
        ledger.apply_income(participants, income);
    }
    for transfer in transfers {
        ledger.apply_transfer(transfer);
    }

    ledger
}
