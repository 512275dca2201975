//! Party commands
//!
//! Create, list and inspect parties.

use std::io::Write;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::party::{format_party_details, format_party_list};
use crate::error::LedgerResult;
use crate::services::{party as party_service, summarize, PartyService};
use crate::store::PartyStore;

/// Party subcommands
#[derive(Subcommand, Debug)]
pub enum PartyCommands {
    /// Add a new party
    Add {
        /// Party name (quote names containing spaces)
        name: String,
    },
    /// List all parties with their balances
    #[command(alias = "ls")]
    List,
    /// Show a party's balance and entries
    Show {
        /// Party name or ID
        party: String,
    },
}

/// Handle a party command
pub fn handle_party_command<W: Write>(
    store: &mut PartyStore,
    settings: &Settings,
    cmd: PartyCommands,
    out: &mut W,
) -> LedgerResult<()> {
    match cmd {
        PartyCommands::Add { name } => {
            let created = party_service::create(store, &name)?;
            writeln!(out, "Added party: {}", created.name)?;
            writeln!(out, "  ID: {}", created.id)?;
        }

        PartyCommands::List => {
            let summaries = PartyService::new(store).list_with_balances();
            write!(
                out,
                "{}",
                format_party_list(&summaries, &settings.currency_symbol)
            )?;
        }

        PartyCommands::Show { party } => {
            let found = PartyService::new(store).find(&party)?;
            write!(
                out,
                "{}",
                format_party_details(
                    &summarize(found),
                    &settings.currency_symbol,
                    &settings.date_format
                )
            )?;
        }
    }

    Ok(())
}
