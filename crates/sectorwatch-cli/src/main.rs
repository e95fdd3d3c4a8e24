//! sectorwatch - sector package update and session monitor
//!
//! This is the main entry point for the sectorwatch CLI.
//! It wires together all the components:
//! - Configuration loading
//! - Console host adapter
//! - HTTP fetcher
//! - The monitor engine, driven by a once-per-second tick loop

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sectorwatch_api::{CheckTrigger, CMD_STATUS, CMD_UPDATE_OPEN};
use sectorwatch_config::{default_config_path, load_or_default};
use sectorwatch_core::Monitor;
use sectorwatch_host_http::{ConsoleHost, HttpFetcher};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// sectorwatch - Sector package update and session monitor
#[derive(Parser, Debug)]
#[command(name = "sectorwatch")]
#[command(about = "Sector package update and session monitor", long_about = None)]
struct Args {
    /// Configuration file path (default: ~/.config/sectorwatch/config.toml)
    #[arg(short, long, default_value_os_t = default_config_path())]
    config: PathBuf,

    /// Loaded sector label (or set SECTORWATCH_LABEL env var)
    #[arg(short = 's', long, env = "SECTORWATCH_LABEL")]
    sector_label: Option<String>,

    /// Treat the session as connected for break reminders
    #[arg(long)]
    connected: bool,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Run the monitor loop, ticking once per second until interrupted
    Run,
    /// Run one manual update check and exit
    Check,
    /// Print a local/remote version summary and exit
    Status,
    /// Open the advertised download URL and exit
    Open,
    /// Feed one command line to the monitor (e.g. ".sectorwatch-hey")
    Command {
        /// The command line to handle
        line: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "sectorwatch starting"
    );

    let config = load_or_default(&args.config)
        .with_context(|| format!("Failed to load config from {:?}", args.config))?;

    info!(
        config_path = %args.config.display(),
        manifest_url = %config.manifest_url,
        "Configuration loaded"
    );

    let host = Arc::new(ConsoleHost::new(args.sector_label.clone(), args.connected));
    let fetcher = Arc::new(HttpFetcher::new(config.fetch_timeout));
    let mut monitor = Monitor::new(config, host, fetcher);

    match args.command {
        CliCommand::Run => run_loop(&mut monitor),
        CliCommand::Check => {
            monitor
                .check_and_notify(CheckTrigger::Manual)
                .context("Update check failed")?;
            Ok(())
        }
        CliCommand::Status => {
            monitor.handle_command(CMD_STATUS);
            Ok(())
        }
        CliCommand::Open => {
            monitor.handle_command(CMD_UPDATE_OPEN);
            Ok(())
        }
        CliCommand::Command { line } => {
            if !monitor.handle_command(&line) {
                bail!("Unrecognized command: {}", line);
            }
            Ok(())
        }
    }
}

/// Drive the monitor with a wall-clock tick, one per second
fn run_loop(monitor: &mut Monitor) -> Result<()> {
    info!("Entering monitor loop");
    let mut counter: u64 = 0;
    loop {
        monitor.on_timer(counter);
        std::thread::sleep(Duration::from_secs(1));
        counter += 1;
    }
}
