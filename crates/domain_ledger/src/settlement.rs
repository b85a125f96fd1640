//! Settlement matching
//!
//! Turns the signed balances of a [`Ledger`] into point-to-point payments
//! that bring every balance to zero.
//!
//! The matcher is greedy: it pairs the largest remaining debt with the
//! largest remaining credit, settles the smaller of the two, and moves on.
//! This keeps the payment list short but does not search for the global
//! minimum number of payments.

use serde::{Deserialize, Serialize};
use tracing::trace;

use core_kernel::Cents;

use crate::aggregator::Ledger;
use crate::participant::Participant;

/// A suggested payment: `from` should pay `to` the given amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: Participant,
    pub to: Participant,
    pub amount: Cents,
}

/// Outstanding amount still to be matched for one side
#[derive(Debug)]
struct Position<'a> {
    participant: &'a Participant,
    remaining: Cents,
}

/// Splits the roster into creditors and debtors, largest first
///
/// Both lists hold positive amounts. The sort is stable, so equal amounts
/// keep roster order.
fn partition<'a>(
    participants: &'a [Participant],
    ledger: &Ledger,
) -> (Vec<Position<'a>>, Vec<Position<'a>>) {
    let mut creditors = Vec::new();
    let mut debtors = Vec::new();

    for participant in participants {
        let balance = ledger
            .entry(&participant.id)
            .map(|e| e.balance)
            .unwrap_or_default();

        if balance.is_positive() {
            creditors.push(Position {
                participant,
                remaining: balance,
            });
        } else if balance.is_negative() {
            debtors.push(Position {
                participant,
                remaining: balance.abs(),
            });
        }
    }

    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

    (creditors, debtors)
}

/// Produces the payments that clear the ledger's balances
///
/// Payments come out in the order the scan generates them (largest pair
/// first) and every amount is strictly positive. A balanced ledger yields
/// no payments.
pub fn settle(participants: &[Participant], ledger: &Ledger) -> Vec<Settlement> {
    let (mut creditors, mut debtors) = partition(participants, ledger);
    let mut settlements = Vec::new();

    let mut i = 0;
    let mut j = 0;

    while i < debtors.len() && j < creditors.len() {
        let debtor = &mut debtors[i];
        let creditor = &mut creditors[j];
        let amount = debtor.remaining.min(creditor.remaining);

        if amount.is_positive() {
            trace!(
                from = %debtor.participant.id,
                to = %creditor.participant.id,
                %amount,
                "matched settlement"
            );
            settlements.push(Settlement {
                from: debtor.participant.clone(),
                to: creditor.participant.clone(),
                amount,
            });
        }

        debtor.remaining -= amount;
        creditor.remaining -= amount;

        if debtor.remaining.is_zero() {
            i += 1;
        }
        if creditor.remaining.is_zero() {
            j += 1;
        }
    }

    settlements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::event::Transfer;
    use core_kernel::Money;
    use rust_decimal_macros::dec;

    fn roster(names: &[&str]) -> Vec<Participant> {
        names
            .iter()
            .map(|n| Participant::new(*n, "#22c55e"))
            .collect()
    }

    #[test]
    fn test_balanced_ledger_has_no_settlements() {
        let people = roster(&["A", "B"]);
        let ledger = aggregate(&people, &[], &[], &[]);
        assert!(settle(&people, &ledger).is_empty());
    }

    #[test]
    fn test_transfer_is_paid_back() {
        let people = roster(&["A", "B"]);
        let transfer = Transfer::new(people[0].id, people[1].id, Money::new(dec!(20)));
        let ledger = aggregate(&people, &[], &[], &[transfer]);

        let settlements = settle(&people, &ledger);
        assert_eq!(settlements.len(), 1);
        assert_eq!(settlements[0].from.id, people[1].id);
        assert_eq!(settlements[0].to.id, people[0].id);
        assert_eq!(settlements[0].amount, Cents::new(2000));
    }

    #[test]
    fn test_largest_debtor_is_matched_first() {
        let people = roster(&["A", "B", "C"]);
        // A +30, B -10, C -20
        let transfers = vec![
            Transfer::new(people[0].id, people[1].id, Money::new(dec!(10))),
            Transfer::new(people[0].id, people[2].id, Money::new(dec!(20))),
        ];
        let ledger = aggregate(&people, &[], &[], &transfers);

        let settlements = settle(&people, &ledger);
        let order: Vec<_> = settlements.iter().map(|s| (s.from.id, s.amount)).collect();
        assert_eq!(
            order,
            vec![(people[2].id, Cents::new(2000)), (people[1].id, Cents::new(1000))]
        );
    }
}
