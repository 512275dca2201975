//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. The binary drives
//! these through an interactive [`Session`].

pub mod entry;
pub mod party;
pub mod session;

pub use entry::{handle_entry_command, EntryCommands};
pub use party::{handle_party_command, PartyCommands};
pub use session::{write_config, Flow, Session};
