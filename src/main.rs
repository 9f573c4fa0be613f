//! Dossier, a terminal character sheet viewer.
//!
//! Loads a character snapshot (and optionally an environment snapshot),
//! then presents stats, encumbrance, skills, traits, and effects as
//! navigable panels with a shared detail pane.

mod config;
mod core;
mod data;
mod theme;
mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use data::{CharacterSheet, EnvironmentSnapshot};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dossier")]
#[command(about = "Terminal character sheet viewer", long_about = None)]
struct Cli {
    /// Character snapshot (JSON); shows a built-in sample sheet when omitted
    sheet: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Environment snapshot (JSON)
    #[arg(short, long, value_name = "FILE")]
    environment: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a character snapshot without entering the viewer
    Validate {
        /// Snapshot file to check
        sheet: PathBuf,
    },
}

fn main() -> Result<()> {
    // The TUI owns stdout, so logs go to a file (RUST_LOG controls level).
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("dossier.log")
        .context("Failed to open log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    if let Some(Commands::Validate { sheet }) = cli.command {
        let sheet = CharacterSheet::load(&sheet)?;
        println!("✓ Character sheet loaded");
        println!(
            "  {} ({}): {} body regions, {} skills, {} traits, {} effects",
            sheet.name,
            sheet.profession,
            sheet.body.len(),
            sheet.skills.len(),
            sheet.traits.len(),
            sheet.effects.len()
        );
        return Ok(());
    }

    let config = config::Config::load(cli.config.as_deref())?;

    let sheet = match &cli.sheet {
        Some(path) => CharacterSheet::load(path)?,
        None => {
            tracing::info!("No snapshot given, showing the built-in sample sheet");
            CharacterSheet::sample()
        }
    };
    let env = match &cli.environment {
        Some(path) => EnvironmentSnapshot::load(path)?,
        None => EnvironmentSnapshot::default(),
    };

    tracing::info!(character = %sheet.name, "Starting sheet session");
    ui::SheetSession::new(&sheet, &env, &config)?.run()
}
