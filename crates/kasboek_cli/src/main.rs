//! Command-line front end for the Kasboek ledger.
//!
//! # Responsibility
//! - Parse arguments and resolve configuration (env first, flags override).
//! - Dispatch each entity to the command runner for its record shape.
//! - Report failures on stderr with a non-zero exit code.

mod commands;

use clap::{Args, Parser, Subcommand, ValueEnum};
use commands::{Action, RecordArgs};
use kasboek_core::{
    savings_progress_cards, AppConfig, AppContext, EntityKind, Entry, Investment, RecordShape,
    Saving,
};
use std::path::PathBuf;
use std::process::ExitCode;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "kasboek", version, about = "Personal finance ledger.")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct GlobalArgs {
    /// SQLite database file (overrides KASBOEK_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
    /// trace|debug|info|warn|error (overrides KASBOEK_LOG_LEVEL)
    #[arg(long = "log-level", global = true)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files (overrides KASBOEK_LOG_DIR)
    #[arg(long = "log-dir", global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// List records, optionally filtered by category and search text.
    List {
        entity: EntityArg,
        /// Category filter option id; repeat to combine
        #[arg(long = "filter")]
        filters: Vec<String>,
        /// Case-insensitive search over the searchable fields
        #[arg(long)]
        search: Option<String>,
        /// Column keys to show, e.g. name,amount,date
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,
    },
    /// Add a record.
    Add {
        entity: EntityArg,
        #[command(flatten)]
        fields: RecordArgs,
    },
    /// Edit fields of an existing record.
    Edit {
        entity: EntityArg,
        id: Uuid,
        #[command(flatten)]
        fields: RecordArgs,
    },
    /// Remove a record by id.
    Remove { entity: EntityArg, id: Uuid },
    /// Show overview cards.
    Overview { entity: EntityArg },
}

#[derive(Clone, Copy, ValueEnum)]
enum EntityArg {
    Income,
    Expense,
    FixedExpense,
    Subscription,
    Saving,
    Investment,
}

impl From<EntityArg> for EntityKind {
    fn from(value: EntityArg) -> Self {
        match value {
            EntityArg::Income => EntityKind::Income,
            EntityArg::Expense => EntityKind::Expense,
            EntityArg::FixedExpense => EntityKind::FixedExpense,
            EntityArg::Subscription => EntityKind::Subscription,
            EntityArg::Saving => EntityKind::Saving,
            EntityArg::Investment => EntityKind::Investment,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, String> {
    let config = resolve_config(cli.global)?;
    let ctx = AppContext::open(config).map_err(|err| err.to_string())?;

    let (kind, action) = split_command(cli.command);
    let output = match kind.schema().shape {
        RecordShape::Entry => commands::run::<Entry>(&ctx, kind, action, |_| Vec::new()),
        RecordShape::Saving => commands::run::<Saving>(&ctx, kind, action, savings_progress_cards),
        RecordShape::Investment => {
            commands::run::<Investment>(&ctx, kind, action, |_| Vec::new())
        }
    }?;

    ctx.close().map_err(|err| err.to_string())?;
    Ok(output)
}

fn resolve_config(global: GlobalArgs) -> Result<AppConfig, String> {
    let mut config = AppConfig::from_env().map_err(|err| err.to_string())?;
    if let Some(db) = global.db {
        config.db_path = db;
    }
    if let Some(level) = global.log_level {
        config.log_level = level;
    }
    if let Some(log_dir) = global.log_dir {
        config.log_dir = Some(log_dir);
    }
    config.validate().map_err(|err| err.to_string())
}

fn split_command(command: Command) -> (EntityKind, Action) {
    match command {
        Command::List {
            entity,
            filters,
            search,
            columns,
        } => (
            entity.into(),
            Action::List {
                filters,
                search,
                columns,
            },
        ),
        Command::Add { entity, fields } => (entity.into(), Action::Add(fields)),
        Command::Edit { entity, id, fields } => (entity.into(), Action::Edit(id, fields)),
        Command::Remove { entity, id } => (entity.into(), Action::Remove(id)),
        Command::Overview { entity } => (entity.into(), Action::Overview),
    }
}
