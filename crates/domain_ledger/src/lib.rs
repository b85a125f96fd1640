//! Shared Ledger Domain
//!
//! This crate records shared money movements for a small group and computes
//! who owes whom.
//!
//! # Key Concepts
//!
//! - **Participant**: a named party on the roster
//! - **Expense**: a cost fronted by one participant, split evenly across the roster
//! - **Income**: money received by one participant, credited evenly across the roster
//! - **Transfer**: a direct payment between two participants
//! - **Settlement**: a suggested payment that moves balances toward zero
//!
//! # Pipeline
//!
//! [`compute_summary`] folds the whole history into per-participant ledger
//! entries ([`aggregator`]), pairs debtors with creditors ([`settlement`]),
//! and converts the results back to decimal money. It is pure and keeps no
//! state between calls; callers simply re-run it whenever the history changes.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::Money;
//! use domain_ledger::{compute_summary, Expense, Participant};
//! use rust_decimal::Decimal;
//!
//! let ana = Participant::new("Ana", "#38bdf8");
//! let ben = Participant::new("Ben", "#ec4899");
//! let dinner = Expense::new("Dinner", Money::new(Decimal::new(3000, 2)), ana.id);
//!
//! let summary = compute_summary(&[ana.clone(), ben.clone()], &[dinner], &[], &[]);
//! assert_eq!(summary.settlements.len(), 1);
//! assert_eq!(summary.settlements[0].from.id, ben.id);
//! assert_eq!(summary.settlements[0].amount, Money::new(Decimal::new(1500, 2)));
//! ```

pub mod aggregator;
pub mod book;
pub mod error;
pub mod event;
pub mod participant;
pub mod settlement;
pub mod summary;

pub use aggregator::{aggregate, Ledger, LedgerEntry};
pub use book::{
    ExpenseUpdate, FinanceBook, IncomeUpdate, NewExpense, NewIncome, NewTransfer,
    ParticipantUpdate, TransferUpdate,
};
pub use error::{EventKind, LedgerError};
pub use event::{Expense, Income, Transfer};
pub use participant::{pick_color, Participant, PARTICIPANT_PALETTE};
pub use settlement::{settle, Settlement};
pub use summary::{compute_summary, FinanceSummary, LedgerSnapshot, PersonBreakdown, SettlementLine};
