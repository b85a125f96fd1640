//! Core Kernel - Foundational types for the shared ledger
//!
//! This crate provides the building blocks used by the ledger domain and
//! its interfaces:
//! - Money at the boundary, exact minor units (cents) inside
//! - Strongly-typed record identifiers

pub mod money;
pub mod identifiers;

pub use money::{Money, Cents, MoneyError, DECIMAL_PLACES, MINOR_PER_MAJOR};
pub use identifiers::{ParticipantId, ExpenseId, IncomeId, TransferId};
