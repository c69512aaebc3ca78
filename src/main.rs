mod commands;
mod config;
mod logging;
mod render;
mod session;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crate::config::DatebookConfig;
use crate::session::Session;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "datebook")]
#[command(version, about = "Add, find, delete and print calendar events, one command per line")]
struct Cli {
    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Config file (defaults to ~/.config/datebook/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the config path and effective settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = DatebookConfig::load(cli.config.as_deref())?;
    logging::init(cli.verbose, &config.log_level)?;

    match cli.command {
        Some(Commands::Config) => {
            let path = match cli.config {
                Some(path) => path,
                None => DatebookConfig::default_path()?,
            };
            commands::config::run(&path, &config)
        }
        None => run_session(cli.input, &config),
    }
}

fn run_session(input: Option<PathBuf>, config: &DatebookConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut session = Session::new(stdout.lock(), config.color);

    let summary = match input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            info!(path = %path.display(), "reading commands from file");
            session.run(BufReader::new(file))?
        }
        None => session.run(io::stdin().lock())?,
    };

    info!(
        commands = summary.commands,
        failures = summary.failures,
        exited = summary.exited,
        dates = session.store().date_count(),
        events = session.store().event_count(),
        "session finished"
    );

    Ok(())
}
