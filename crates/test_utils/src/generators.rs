//! Property-Based Test Generators
//!
//! Provides proptest strategies for rosters and event histories. Generated
//! events only reference participants on the generated roster, and transfers
//! always move money between two different people.

use core_kernel::{Money, ParticipantId};
use domain_ledger::{Expense, Income, LedgerSnapshot, Participant, Transfer, PARTICIPANT_PALETTE};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for positive amounts in cents (up to 100,000.00)
pub fn positive_cents_strategy() -> impl Strategy<Value = i64> {
    1i64..=10_000_000i64
}

/// Strategy for positive Money values with two decimal places
pub fn positive_money_strategy() -> impl Strategy<Value = Money> {
    positive_cents_strategy().prop_map(|cents| Money::from_cents(cents.into()))
}

/// Strategy for positive Decimal amounts as a caller would submit them
pub fn positive_decimal_strategy() -> impl Strategy<Value = Decimal> {
    positive_cents_strategy().prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for a roster of `1..=max` participants with distinct ids
pub fn roster_strategy(max: usize) -> impl Strategy<Value = Vec<Participant>> {
    (1..=max.max(1)).prop_map(|size| {
        (0..size)
            .map(|i| {
                Participant::new(
                    format!("Person {}", i + 1),
                    PARTICIPANT_PALETTE[i % PARTICIPANT_PALETTE.len()],
                )
                .with_id(ParticipantId::new())
            })
            .collect()
    })
}

/// An event drawn against roster positions rather than ids
#[derive(Debug, Clone)]
enum EventSeed {
    Expense { payer: usize, cents: i64 },
    Income { receiver: usize, cents: i64 },
    Transfer { from: usize, offset: usize, cents: i64 },
}

fn event_seed_strategy() -> impl Strategy<Value = EventSeed> {
    prop_oneof![
        (any::<usize>(), positive_cents_strategy())
            .prop_map(|(payer, cents)| EventSeed::Expense { payer, cents }),
        (any::<usize>(), positive_cents_strategy())
            .prop_map(|(receiver, cents)| EventSeed::Income { receiver, cents }),
        (any::<usize>(), any::<usize>(), positive_cents_strategy())
            .prop_map(|(from, offset, cents)| EventSeed::Transfer { from, offset, cents }),
    ]
}

fn plant(snapshot: &mut LedgerSnapshot, seed: EventSeed) {
    let roster = &snapshot.participants;
    let n = roster.len();
    match seed {
        EventSeed::Expense { payer, cents } => {
            let payer_id = roster[payer % n].id;
            snapshot
                .expenses
                .push(Expense::new("Expense", Money::from_cents(cents.into()), payer_id));
        }
        EventSeed::Income { receiver, cents } => {
            let receiver_id = roster[receiver % n].id;
            snapshot
                .incomes
                .push(Income::new("Income", Money::from_cents(cents.into()), receiver_id));
        }
        // Transfers need two distinct people; single-person rosters drop them.
        EventSeed::Transfer { from, offset, cents } if n > 1 => {
            let from = from % n;
            let to = (from + 1 + offset % (n - 1)) % n;
            snapshot.transfers.push(Transfer::new(
                roster[from].id,
                roster[to].id,
                Money::from_cents(cents.into()),
            ));
        }
        EventSeed::Transfer { .. } => {}
    }
}

/// Strategy for a roster of up to `max_people` and up to `max_events` events
/// that only reference people on that roster
pub fn history_strategy(
    max_people: usize,
    max_events: usize,
) -> impl Strategy<Value = LedgerSnapshot> {
    (
        roster_strategy(max_people),
        prop::collection::vec(event_seed_strategy(), 0..=max_events),
    )
        .prop_map(|(participants, seeds)| {
            let mut snapshot = LedgerSnapshot {
                participants,
                ..Default::default()
            };
            for seed in seeds {
                plant(&mut snapshot, seed);
            }
            snapshot
        })
}
