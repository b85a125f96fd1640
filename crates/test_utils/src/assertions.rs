//! Custom Test Assertions
//!
//! Assertion helpers for summaries that give more meaningful failure
//! messages than bare `assert_eq!` on nested structures.

use std::collections::HashMap;

use core_kernel::{Cents, Money, ParticipantId};
use domain_ledger::FinanceSummary;
use rust_decimal::Decimal;

/// Asserts that a Money value equals the given decimal amount
pub fn assert_money_eq(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Money mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts a participant's balance in the summary
///
/// # Panics
///
/// Panics if the participant has no breakdown row or the balance differs
pub fn assert_balance(summary: &FinanceSummary, id: &ParticipantId, expected: Decimal) {
    let row = summary
        .breakdown_for(id)
        .unwrap_or_else(|| panic!("No breakdown row for participant {}", id));
    assert_eq!(
        row.balance.amount(),
        expected,
        "Balance mismatch for {}: actual={}, expected={}",
        row.participant.name,
        row.balance,
        expected
    );
}

/// Sum of all breakdown balances, in cents
pub fn net_balance_cents(summary: &FinanceSummary) -> Cents {
    summary
        .breakdown
        .iter()
        .map(|row| row.balance.to_cents_saturating())
        .sum()
}

/// Asserts that the breakdown balances sum to zero
pub fn assert_conserved(summary: &FinanceSummary) {
    let net = net_balance_cents(summary);
    assert!(
        net.is_zero(),
        "Balances do not sum to zero: net={}",
        net
    );
}

/// Balances left after every suggested settlement is paid
pub fn balances_after_settling(summary: &FinanceSummary) -> HashMap<ParticipantId, Cents> {
    let mut balances: HashMap<ParticipantId, Cents> = summary
        .breakdown
        .iter()
        .map(|row| (row.participant.id, row.balance.to_cents_saturating()))
        .collect();

    for line in &summary.settlements {
        let amount = line.amount.to_cents_saturating();
        *balances.entry(line.from.id).or_default() += amount;
        *balances.entry(line.to.id).or_default() -= amount;
    }
    balances
}

/// Asserts that paying every suggested settlement clears all balances
/// and that every settlement amount is strictly positive
pub fn assert_settlements_clear(summary: &FinanceSummary) {
    for line in &summary.settlements {
        assert!(
            line.amount.is_positive(),
            "Settlement {} -> {} has non-positive amount {}",
            line.from.name,
            line.to.name,
            line.amount
        );
        assert_ne!(
            line.from.id, line.to.id,
            "Settlement pays {} to themselves",
            line.from.name
        );
    }

    for (id, remaining) in balances_after_settling(summary) {
        assert!(
            remaining.is_zero(),
            "Participant {} still has balance {} after settling",
            id,
            remaining
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_ledger::compute_summary;
    use rust_decimal_macros::dec;

    use crate::builders::TestTransferBuilder;
    use crate::fixtures::ParticipantFixtures;

    #[test]
    fn test_settled_transfer_clears() {
        let people = ParticipantFixtures::pair();
        let transfer = TestTransferBuilder::new().build();
        let summary = compute_summary(&people, &[], &[], &[transfer]);

        assert_balance(&summary, &people[0].id, dec!(20.00));
        assert_conserved(&summary);
        assert_settlements_clear(&summary);
    }

    #[test]
    #[should_panic(expected = "still has balance")]
    fn test_unsettled_balance_panics() {
        let people = ParticipantFixtures::pair();
        let transfer = TestTransferBuilder::new().build();
        let mut summary = compute_summary(&people, &[], &[], &[transfer]);
        summary.settlements.clear();
        assert_settlements_clear(&summary);
    }
}
