//! Greenhouse CLI - Command-line interface for Greenhouse
//!
//! Provides `greenhouse plant`, `greenhouse journal`, and `greenhouse watch`.

mod commands;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use greenhouse_core::Database;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::journal::JournalCommands;
use commands::plant::PlantCommands;

/// Database file name inside the data directory
const DB_FILE: &str = "plant_tracker.db";

#[derive(Parser)]
#[command(name = "greenhouse")]
#[command(about = "Greenhouse - track houseplants, watering, and growth notes")]
#[command(version)]
struct Cli {
    /// Database file (defaults to ~/.greenhouse/plant_tracker.db)
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage plants
    Plant {
        #[command(subcommand)]
        action: PlantCommands,
    },
    /// Manage journal entries
    Journal {
        #[command(subcommand)]
        action: JournalCommands,
    },
    /// Keep the plant list on screen and refresh watering status
    Watch {
        /// Seconds between refreshes
        #[arg(short, long, default_value_t = 60)]
        interval: u64,
        /// Stop after this many refreshes
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        iterations: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let db_path = match cli.db {
        Some(path) => path,
        None => get_data_dir()?.join(DB_FILE),
    };
    let db = open_database(&db_path)?;

    match cli.command {
        Commands::Plant { action } => commands::plant::execute(action, &db),
        Commands::Journal { action } => commands::journal::execute(action, &db),
        Commands::Watch {
            interval,
            iterations,
        } => commands::watch::execute(&db, interval, iterations),
    }
}

/// Install a stderr subscriber; `RUST_LOG` overrides the `-v` level
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn get_data_dir() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".greenhouse"))
}

fn open_database(path: &Path) -> anyhow::Result<Database> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
    }

    Database::open(path).with_context(|| format!("Failed to open database {}", path.display()))
}
