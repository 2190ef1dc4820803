use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use snaphead_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "snaphead")]
#[command(author, version, about = "Scrollable text under a header that collapses and snaps")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Header bar height in rows (overrides config)
        #[arg(long)]
        bar_height: Option<f64>,
        /// Header title (overrides config)
        #[arg(long)]
        title: Option<String>,
    },
    /// Print the effective configuration as TOML
    Config {
        /// Also write it to the config file path
        #[arg(long)]
        write: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;

    match cli.command {
        Some(Commands::Run { bar_height, title }) => {
            if let Some(bar_height) = bar_height {
                config.header.bar_height = bar_height;
            }
            if let Some(title) = title {
                config.header.title = title;
            }
            config.validate()?;
            init_logging(&config)?;
            commands::run::run(config).await
        }
        None => {
            init_logging(&config)?;
            commands::run::run(config).await
        }
        Some(Commands::Config { write }) => commands::config::run(&config, write),
    }
}

/// Log to a file under the data dir; the terminal belongs to the TUI.
fn init_logging(config: &AppConfig) -> Result<()> {
    let log_path = config.log_path();
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening log file {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}
