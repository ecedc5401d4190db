// SPDX-FileCopyrightText: 2026 Tariff Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tariff - a fixed-rate utility billing calculator.
//!
//! This is the binary entry point. Bill lines go to stdout; logs and
//! diagnostics go to stderr.

mod driver;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tariff_config::TariffConfig;
use tariff_core::TariffError;
use tariff_plans::PlanFactory;

use crate::driver::{BillingOptions, OutputMode};

/// Tariff - a fixed-rate utility billing calculator.
#[derive(Parser, Debug)]
#[command(name = "tariff", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Price the configured requests (the built-in samples if none are configured).
    Run {
        /// Emit bills as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Price a single request.
    Bill {
        /// Plan category (Domestic, Commercial, Institutional).
        category: String,
        /// Units consumed.
        units: u64,
        /// Emit the bill as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the per-unit rate of every plan.
    Rates,
}

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => tariff_config::load_and_validate_path(path),
        None => tariff_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            tariff_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(cli.command, &config, PlanFactory::shared(), &mut out) {
        tracing::error!(error = %e, "tariff failed");
        eprintln!("tariff: {e}");
        std::process::exit(1);
    }
}

/// Dispatch a subcommand against an explicit factory.
fn run<W: Write>(
    command: Option<Commands>,
    config: &TariffConfig,
    factory: &PlanFactory,
    out: &mut W,
) -> Result<(), TariffError> {
    let mode = |json: bool| if json { OutputMode::Json } else { OutputMode::Text };

    match command.unwrap_or(Commands::Run { json: false }) {
        Commands::Run { json } => {
            let options = BillingOptions::from_config(&config.billing, mode(json));
            let requests = config.effective_requests();
            driver::run_requests(factory, &requests, &options, out)?;
        }
        Commands::Bill {
            category,
            units,
            json,
        } => {
            let options = BillingOptions::from_config(&config.billing, mode(json));
            driver::run_label(factory, &category, units, &options, out)?;
        }
        Commands::Rates => {
            let options = BillingOptions::from_config(&config.billing, OutputMode::Text);
            driver::write_rate_card(factory, &options, out)?;
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "tariff={level},tariff_plans={level},tariff_config={level},warn",
            level = log_level.trim().to_lowercase()
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
