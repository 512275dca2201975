use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use party_ledger::audit::AuditLogger;
use party_ledger::cli::{write_config, Session};
use party_ledger::config::{paths::DIR_ENV_VAR, LedgerPaths, Settings};
use party_ledger::store::PartyStore;

#[derive(Parser)]
#[command(
    name = "party-ledger",
    version,
    about = "Track shared expenses per party and see who owes what",
    long_about = "Party Ledger keeps a running balance for each party (a group you \
                  share expenses with). Purchases lower the balance; payments and \
                  returns raise it. Data lives for the length of one session."
)]
struct Cli {
    /// Directory for settings and the audit log
    #[arg(long, env = DIR_ENV_VAR, global = true)]
    data_dir: Option<PathBuf>,

    /// Currency symbol for this session (overrides settings)
    #[arg(long, global = true)]
    currency: Option<String>,

    /// Don't write the audit log for this session
    #[arg(long, global = true)]
    no_audit: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Session,

    /// Write a default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let stored = Settings::load_or_create(&paths)?;
    let mut settings = stored.clone();

    if let Some(symbol) = cli.currency {
        settings.currency_symbol = symbol;
    }
    if cli.no_audit {
        settings.audit_enabled = false;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Init) => {
            stored.save(&paths)?;
            writeln!(out, "Wrote settings to {}", paths.settings_file().display())?;
        }
        Some(Commands::Config) => {
            write_config(&paths, &settings, &mut out)?;
        }
        Some(Commands::Session) | None => {
            let mut store = if settings.audit_enabled {
                paths
                    .ensure_directories()
                    .context("Failed to prepare the audit log directory")?;
                PartyStore::with_audit(AuditLogger::new(paths.audit_log()))
            } else {
                PartyStore::new()
            };

            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            if interactive {
                writeln!(out, "Party Ledger - type 'help' for commands, 'quit' to leave.")?;
            }

            Session::new(&mut store, &settings, &paths).run(stdin.lock(), &mut out, interactive)?;
        }
    }

    Ok(())
}
