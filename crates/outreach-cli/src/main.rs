mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{clients, completions, records, stats, transfer, Context};
use crate::error::{exit_code_for, report_error};
use outreach_config as config;
use outreach_store::{paths, RecordStore, SqliteBackend};

#[derive(Debug, Parser)]
#[command(name = "outreach", version, about = "outreach CLI")]
struct Cli {
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Record a new contact
    Add(records::AddArgs),
    List(records::ListArgs),
    /// Contact timeline for one client
    History(clients::HistoryArgs),
    Clients,
    Stats,
    #[command(name = "set-status")]
    SetStatus(records::SetStatusArgs),
    #[command(name = "edit-obs")]
    EditObs(records::EditObsArgs),
    Delete(records::DeleteArgs),
    Export(transfer::ExportArgs),
    Import(transfer::ImportArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        db_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    if let Command::Completions(args) = command {
        return completions::emit(args);
    }

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let db_path = paths::resolve_db_path(db_path).with_context(|| "resolve database path")?;
    debug!(path = %db_path.display(), slot = %app_config.slot, "opening store");

    let backend = SqliteBackend::open(&db_path)
        .with_context(|| format!("open database {}", db_path.display()))?;
    let store = RecordStore::with_slot(backend, app_config.slot.clone());

    let ctx = Context {
        store: &store,
        json,
        config: &app_config,
    };

    match command {
        Command::Add(args) => records::add_record(&ctx, args),
        Command::List(args) => records::list_records(&ctx, args),
        Command::History(args) => clients::show_history(&ctx, args),
        Command::Clients => clients::list_clients(&ctx),
        Command::Stats => stats::show_stats(&ctx),
        Command::SetStatus(args) => records::set_status(&ctx, args),
        Command::EditObs(args) => records::edit_observations(&ctx, args),
        Command::Delete(args) => records::delete_record(&ctx, args),
        Command::Export(args) => transfer::export(&ctx, args),
        Command::Import(args) => transfer::import(&ctx, args),
        Command::Completions(_) => {
            unreachable!("completions command handled before store initialization")
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
