//! Finance summary
//!
//! The single entry point consumed by presentation layers: aggregate the
//! history, match settlements, and convert every amount back from cents to
//! [`Money`] at this boundary only.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use core_kernel::{Cents, Money, ParticipantId};

use crate::aggregator::aggregate;
use crate::event::{Expense, Income, Transfer};
use crate::participant::Participant;
use crate::settlement::settle;

/// One participant's row of the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonBreakdown {
    pub participant: Participant,
    pub balance: Money,
    pub spent: Money,
    pub received: Money,
}

/// A suggested payment in external money representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementLine {
    pub from: Participant,
    pub to: Participant,
    pub amount: Money,
}

/// Computed balances, settlements, and totals for one event history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    /// One row per participant, in roster order
    pub breakdown: Vec<PersonBreakdown>,
    /// Suggested payments, in the order the matcher produced them
    pub settlements: Vec<SettlementLine>,
    /// Sum of every expense amount, undivided
    pub total_expenses: Money,
    /// Sum of every income amount, undivided
    pub total_incomes: Money,
}

impl FinanceSummary {
    /// Returns the breakdown row for a participant, if they are on the roster
    pub fn breakdown_for(&self, id: &ParticipantId) -> Option<&PersonBreakdown> {
        self.breakdown.iter().find(|row| row.participant.id == *id)
    }
}

/// The roster and full event history handed to the summary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerSnapshot {
    pub participants: Vec<Participant>,
    pub expenses: Vec<Expense>,
    pub incomes: Vec<Income>,
    pub transfers: Vec<Transfer>,
}

impl LedgerSnapshot {
    pub fn summarize(&self) -> FinanceSummary {
        compute_summary(
            &self.participants,
            &self.expenses,
            &self.incomes,
            &self.transfers,
        )
    }
}

/// Computes the balances and suggested settlements for a roster
///
/// Pure and deterministic: identical inputs always produce identical
/// summaries, and nothing is cached between calls.
#[instrument(
    level = "debug",
    skip_all,
    fields(
        participants = participants.len(),
        expenses = expenses.len(),
        incomes = incomes.len(),
        transfers = transfers.len(),
    )
)]
pub fn compute_summary(
    participants: &[Participant],
    expenses: &[Expense],
    incomes: &[Income],
    transfers: &[Transfer],
) -> FinanceSummary {
    let ledger = aggregate(participants, expenses, incomes, transfers);

    let breakdown = participants
        .iter()
        .map(|participant| {
            let entry = ledger.entry(&participant.id).copied().unwrap_or_default();
            PersonBreakdown {
                participant: participant.clone(),
                balance: entry.balance.to_money(),
                spent: entry.spent.to_money(),
                received: entry.received.to_money(),
            }
        })
        .collect();

    let settlements: Vec<SettlementLine> = settle(participants, &ledger)
        .into_iter()
        .map(|s| SettlementLine {
            from: s.from,
            to: s.to,
            amount: s.amount.to_money(),
        })
        .collect();

    let total_expenses: Cents = expenses
        .iter()
        .map(|e| e.amount.to_cents_saturating())
        .sum();
    let total_incomes: Cents = incomes
        .iter()
        .map(|i| i.amount.to_cents_saturating())
        .sum();

    debug!(
        settlements = settlements.len(),
        %total_expenses,
        %total_incomes,
        unbalanced_by = %ledger.net_balance(),
        "computed finance summary"
    );

    FinanceSummary {
        breakdown,
        settlements,
        total_expenses: total_expenses.to_money(),
        total_incomes: total_incomes.to_money(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_history_gives_empty_summary() {
        let summary = compute_summary(&[], &[], &[], &[]);
        assert!(summary.breakdown.is_empty());
        assert!(summary.settlements.is_empty());
        assert!(summary.total_expenses.is_zero());
        assert!(summary.total_incomes.is_zero());
    }

    #[test]
    fn test_totals_are_undivided() {
        let people = vec![
            Participant::new("A", "#38bdf8"),
            Participant::new("B", "#ec4899"),
        ];
        let expenses = vec![
            Expense::new("Fuel", Money::new(dec!(40.10)), people[0].id),
            Expense::new("Food", Money::new(dec!(9.95)), people[1].id),
        ];
        let incomes = vec![Income::new("Deposit back", Money::new(dec!(3)), people[1].id)];

        let summary = compute_summary(&people, &expenses, &incomes, &[]);
        assert_eq!(summary.total_expenses.amount(), dec!(50.05));
        assert_eq!(summary.total_incomes.amount(), dec!(3.00));
    }

    #[test]
    fn test_summary_json_uses_camel_case_totals() {
        let summary = compute_summary(&[], &[], &[], &[]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["totalExpenses"], "0.00");
        assert_eq!(json["totalIncomes"], "0.00");
    }
}
