//! Request bodies
//!
//! Field names are camelCase on the wire. Amounts accept either JSON numbers
//! or decimal strings.

pub mod participants;
pub mod events;
