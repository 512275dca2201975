//! Interactive session
//!
//! The ledger only lives in memory, so the binary runs as one long session:
//! each input line is split shell-style and parsed as a command against the
//! same store. A failing command reports its error and the session goes on.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};

use super::entry::{handle_entry_command, EntryCommands};
use super::party::{handle_party_command, PartyCommands};
use crate::config::{LedgerPaths, Settings};
use crate::error::{LedgerError, LedgerResult};
use crate::services::PartyService;
use crate::store::PartyStore;

const PROMPT: &str = "> ";

/// One line of session input
#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]"
)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Party management commands
    #[command(subcommand)]
    Party(PartyCommands),

    /// Entry commands
    #[command(subcommand)]
    Entry(EntryCommands),

    /// Show a party's balance
    Balance {
        /// Party name or ID
        party: String,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show paths and effective settings
    Config,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Whether the session should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A running session over one store
pub struct Session<'a> {
    store: &'a mut PartyStore,
    settings: &'a Settings,
    paths: &'a LedgerPaths,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a mut PartyStore, settings: &'a Settings, paths: &'a LedgerPaths) -> Self {
        Self {
            store,
            settings,
            paths,
        }
    }

    /// Read and execute lines until EOF or `quit`
    ///
    /// Only failures writing to `out` or reading `input` end the session
    /// early; command errors are printed as `Error: ...`.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        interactive: bool,
    ) -> LedgerResult<()> {
        let mut lines = input.lines();

        loop {
            if interactive {
                write!(out, "{}", PROMPT)?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            match self.execute_line(&line, out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => writeln!(out, "Error: {}", e)?,
            }
        }

        Ok(())
    }

    /// Execute a single line of input
    ///
    /// Blank lines and lines starting with `#` are ignored.
    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> LedgerResult<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let words = shell_words::split(line)
            .map_err(|e| LedgerError::InvalidInput(format!("Could not parse line: {}", e)))?;

        let parsed = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(err) => {
                // clap reports `help` as an "error" carrying the rendered text
                let rendered = err.render().to_string();
                return if err.use_stderr() {
                    Err(LedgerError::InvalidInput(rendered.trim_end().to_string()))
                } else {
                    write!(out, "{}", rendered)?;
                    Ok(Flow::Continue)
                };
            }
        };

        self.execute(parsed.command, out)
    }

    fn execute<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> LedgerResult<Flow> {
        match command {
            SessionCommand::Party(cmd) => {
                handle_party_command(self.store, self.settings, cmd, out)?;
            }
            SessionCommand::Entry(cmd) => {
                handle_entry_command(self.store, self.settings, cmd, out)?;
            }
            SessionCommand::Balance { party } => {
                let service = PartyService::new(self.store);
                let found = service.find(&party)?;
                let balance = service.balance(found.id)?;
                writeln!(
                    out,
                    "{}: {}",
                    found.name,
                    balance.format_with_symbol(&self.settings.currency_symbol)
                )?;
            }
            SessionCommand::Audit { limit } => self.show_audit(limit, out)?,
            SessionCommand::Config => write_config(self.paths, self.settings, out)?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn show_audit<W: Write>(&self, limit: usize, out: &mut W) -> LedgerResult<()> {
        let Some(logger) = self.store.audit_logger() else {
            writeln!(out, "Audit log is disabled.")?;
            return Ok(());
        };

        let total = logger.entry_count()?;
        if total == 0 {
            writeln!(out, "Audit log is empty.")?;
            return Ok(());
        }

        let entries = logger.read_recent(limit)?;
        writeln!(out, "Showing {} of {} audit records:", entries.len(), total)?;
        for entry in entries {
            writeln!(out, "{}", entry.format_human_readable())?;
        }
        Ok(())
    }
}

/// Print paths and effective settings
pub fn write_config<W: Write>(
    paths: &LedgerPaths,
    settings: &Settings,
    out: &mut W,
) -> LedgerResult<()> {
    writeln!(out, "Party Ledger Configuration")?;
    writeln!(out, "==========================")?;
    writeln!(out, "Base directory: {}", paths.base_dir().display())?;
    writeln!(out, "Settings file:  {}", paths.settings_file().display())?;
    writeln!(out, "Audit log:      {}", paths.audit_log().display())?;
    writeln!(out)?;
    writeln!(out, "Settings:")?;
    writeln!(out, "  Currency symbol: {}", settings.currency_symbol)?;
    writeln!(out, "  Date format:     {}", settings.date_format)?;
    writeln!(
        out,
        "  Audit log:       {}",
        if settings.audit_enabled { "enabled" } else { "disabled" }
    )?;
    Ok(())
}
