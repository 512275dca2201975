//! Service layer
//!
//! Balance derivation and the operations that turn user input into store
//! writes.

pub mod balance;
pub mod party;

pub use balance::{compute_balance, summarize, PartySummary};
pub use party::PartyService;
