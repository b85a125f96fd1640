//! Pre-built Test Fixtures
//!
//! Fixed participants, amounts and timestamps. Identifiers are constant so
//! test output and failure messages are reproducible.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{Money, ParticipantId};
use domain_ledger::Participant;
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Fixture for roster members
pub struct ParticipantFixtures;

impl ParticipantFixtures {
    fn fixed(n: u128, name: &str, color: &str) -> Participant {
        Participant::new(name, color).with_id(ParticipantId::from_uuid(Uuid::from_u128(n)))
    }

    pub fn alice() -> Participant {
        Self::fixed(0xA1, "Alice", "#38bdf8")
    }

    pub fn bob() -> Participant {
        Self::fixed(0xB0, "Bob", "#ec4899")
    }

    pub fn carol() -> Participant {
        Self::fixed(0xCA, "Carol", "#f97316")
    }

    pub fn dave() -> Participant {
        Self::fixed(0xDA, "Dave", "#22c55e")
    }

    /// Alice and Bob
    pub fn pair() -> Vec<Participant> {
        vec![Self::alice(), Self::bob()]
    }

    /// Alice, Bob and Carol, in that order
    pub fn trio() -> Vec<Participant> {
        vec![Self::alice(), Self::bob(), Self::carol()]
    }

    /// Alice, Bob, Carol and Dave, in that order
    pub fn quartet() -> Vec<Participant> {
        vec![Self::alice(), Self::bob(), Self::carol(), Self::dave()]
    }

    /// An identifier that is never on any fixture roster
    pub fn removed_id() -> ParticipantId {
        ParticipantId::from_uuid(Uuid::from_u128(0xDEAD))
    }
}

/// Fixture for money amounts
pub struct MoneyFixtures;

impl MoneyFixtures {
    pub fn hundred() -> Money {
        Money::new(dec!(100.00))
    }

    pub fn twenty() -> Money {
        Money::new(dec!(20.00))
    }

    pub fn ten() -> Money {
        Money::new(dec!(10.00))
    }

    /// One cent, the smallest recordable amount
    pub fn cent() -> Money {
        Money::new(dec!(0.01))
    }
}

/// Fixture for timestamps
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Fixed creation time for recorded events (Jan 1, 2024)
    pub fn recorded_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_ids_are_distinct() {
        let ids: Vec<_> = ParticipantFixtures::quartet().iter().map(|p| p.id).collect();
        for (i, id) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(id));
            assert_ne!(*id, ParticipantFixtures::removed_id());
        }
    }

    #[test]
    fn test_fixtures_are_stable() {
        assert_eq!(ParticipantFixtures::alice(), ParticipantFixtures::alice());
    }
}
