//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the shared ledger test suite.
//!
//! # Modules
//!
//! - `fixtures`: Fixed participants, amounts, and timestamps
//! - `builders`: Builder patterns for events and snapshots
//! - `assertions`: Balance and settlement assertions
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
