//! Party Ledger - session-scoped ledger for shared-expense parties
//!
//! Tracks named parties (groups) and the purchases, payments and returns
//! recorded against each, and derives a running balance per party. All data
//! lives in memory for the lifetime of a [`store::PartyStore`].
//!
//! # Architecture
//!
//! - `models`: parties, entries, ids and money
//! - `store`: the in-memory, append-only party store
//! - `services`: balance calculation and input-to-entry operations
//! - `display`: terminal formatting
//! - `cli`: command handlers and the interactive session
//! - `audit`: append-only JSONL audit log
//! - `config`: path resolution and user settings
//! - `error`: error types
//!
//! # Example
//!
//! ```
//! use party_ledger::models::{EntryType, Money, NewEntry};
//! use party_ledger::services::compute_balance;
//! use party_ledger::store::PartyStore;
//!
//! let mut store = PartyStore::new();
//! let trip = store.add_party("Trip")?.id;
//! store.add_entry(trip, NewEntry::today(EntryType::Purchase, Money::from_units(100)))?;
//! store.add_entry(trip, NewEntry::today(EntryType::Payment, Money::from_units(40)))?;
//! store.add_entry(trip, NewEntry::today(EntryType::Return, Money::from_units(10)))?;
//!
//! let party = store.get(trip).unwrap();
//! assert_eq!(compute_balance(&party.entries), Money::from_units(-50));
//! # Ok::<(), party_ledger::LedgerError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod file_io;
pub mod models;
pub mod services;
pub mod store;

pub use error::{LedgerError, LedgerResult};
