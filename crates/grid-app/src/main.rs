// ABOUTME: Main application entry point.
// ABOUTME: Loads a row description and prints how its panels fit the grid.

mod row_file;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use grid_core::LayoutSettings;
use grid_layout::RowEngine;
use row_file::{format_rows, RowFile};
use tracing_subscriber::{fmt, EnvFilter};

/// Lay out dashboard panels on a 12-column grid
#[derive(Parser)]
#[command(name = "panel-grid")]
#[command(version, about = "Lay out dashboard panels on a 12-column grid")]
struct Cli {
    /// Layout settings file (TOML), defaults to the user config directory
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a row into sub-rows and print the resulting widths
    Layout {
        /// Row description (.toml or .json)
        file: PathBuf,

        /// Print sub-rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// Balance a row in place and print the widths and leftover columns
    Balance {
        /// Row description (.toml or .json)
        file: PathBuf,
    },
}

fn load_settings(path: Option<&Path>) -> Result<LayoutSettings> {
    match path {
        Some(path) => LayoutSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => Ok(LayoutSettings::load_or_default()),
    }
}

fn run(cli: Cli) -> Result<String> {
    let settings = load_settings(cli.settings.as_deref())?;
    tracing::debug!("Using {} grid columns", settings.grid_columns);
    let engine = RowEngine::new(settings);

    match cli.command {
        Commands::Layout { file, json } => {
            let row = RowFile::load(&file)?;
            let rows = engine.layout(&row.panels);
            tracing::info!(
                "Laid out {} panels into {} rows",
                row.panels.len(),
                rows.len()
            );
            if json {
                Ok(serde_json::to_string_pretty(&rows)?)
            } else {
                Ok(format_rows(&rows))
            }
        }
        Commands::Balance { file } => {
            let row = RowFile::load(&file)?;
            let balance = engine.balance(&row.panels);
            Ok(format!(
                "{}\nremaining: {}",
                format_rows(std::slice::from_ref(&balance.panels)),
                balance.remaining
            ))
        }
    }
}

fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_env("PANEL_GRID_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run(cli)?;
    println!("{}", output);
    Ok(())
}
