//! Display formatting for terminal output

pub mod party;

pub use party::{format_entry_row, format_party_details, format_party_list};
