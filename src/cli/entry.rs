//! Entry commands

use std::io::Write;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::party::format_entry_row;
use crate::error::LedgerResult;
use crate::services::{party as party_service, PartyService};
use crate::store::PartyStore;

/// Entry subcommands
#[derive(Subcommand, Debug)]
pub enum EntryCommands {
    /// Record a purchase, payment or return against a party
    Add {
        /// Party name or ID
        party: String,
        /// Amount (e.g. "100" or "40.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Entry type (purchase, payment, return)
        #[arg(short = 't', long = "type", default_value = "purchase")]
        entry_type: String,
    },
}

/// Handle an entry command
pub fn handle_entry_command<W: Write>(
    store: &mut PartyStore,
    settings: &Settings,
    cmd: EntryCommands,
    out: &mut W,
) -> LedgerResult<()> {
    match cmd {
        EntryCommands::Add {
            party,
            amount,
            entry_type,
        } => {
            let found = PartyService::new(store).find(&party)?;
            let (party_id, party_name) = (found.id, found.name.clone());

            let entry = party_service::record_entry(store, party_id, &entry_type, &amount)?;
            let balance = PartyService::new(store).balance(party_id)?;

            writeln!(
                out,
                "Recorded for {}: {}",
                party_name,
                format_entry_row(&entry, &settings.currency_symbol, &settings.date_format)
            )?;
            writeln!(
                out,
                "  Balance: {}",
                balance.format_with_symbol(&settings.currency_symbol)
            )?;
        }
    }

    Ok(())
}
