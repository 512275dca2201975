//! Core data models
//!
//! Parties, their entries, and the value types (ids, money) they are built
//! from.

pub mod entry;
pub mod ids;
pub mod money;
pub mod party;

pub use entry::{Entry, EntryType, EntryValidationError, NewEntry};
pub use ids::{EntryId, PartyId};
pub use money::{Money, MoneyParseError, MAX_AMOUNT};
pub use party::{Party, PartyValidationError, MAX_NAME_LEN};
