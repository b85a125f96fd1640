//! Request handlers

pub mod health;
pub mod summary;
pub mod book;
pub mod participants;
pub mod expenses;
pub mod incomes;
pub mod transfers;
