//! Macrosim CLI - Command Line Operations for the Impulse-Response Simulator
//!
//! This is the operational entry point for the macrosim workspace.
//!
//! # Commands
//!
//! - `macrosim simulate --shock monetary --amplitude 1.0 --horizon 40` -
//!   run one impulse-response simulation and print the trajectory, the
//!   headline metrics and the analysis report
//! - `macrosim compare --shock-a monetary --shock-b fiscal` - run two
//!   scenarios over the same horizon and print the differential view
//! - `macrosim check` - resolve and validate the calibration
//!
//! Amplitudes are given in percent (0.1 to 5.0); horizons in quarters
//! (20 to 60). An optional `--calibration <file>` TOML override may
//! supply any subset of the structural parameters.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use macro_model::ShockType;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;
mod output;

pub use error::{CliError, Result};

/// Macrosim impulse-response simulator CLI
#[derive(Parser)]
#[command(name = "macrosim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Calibration override file (TOML)
    #[arg(short, long, global = true)]
    calibration: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Shock kind as accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShockArg {
    /// Unexpected change of the policy rate (TIAO)
    Monetary,
    /// Change in public spending
    Fiscal,
    /// Total-factor-productivity shock
    Productivity,
    /// Credit-spread / country risk-premium shock
    RiskPremium,
    /// Oil-price / terms-of-trade shock
    OilPrice,
}

impl From<ShockArg> for ShockType {
    fn from(arg: ShockArg) -> Self {
        match arg {
            ShockArg::Monetary => ShockType::MonetaryPolicy,
            ShockArg::Fiscal => ShockType::FiscalPolicy,
            ShockArg::Productivity => ShockType::Productivity,
            ShockArg::RiskPremium => ShockType::RiskPremium,
            ShockArg::OilPrice => ShockType::OilPrice,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run one impulse-response simulation
    Simulate {
        /// Shock kind
        #[arg(short, long, value_enum)]
        shock: ShockArg,

        /// Shock amplitude in percent (0.1 to 5.0)
        #[arg(short, long, default_value_t = 1.0)]
        amplitude: f64,

        /// Horizon in quarters (20 to 60)
        #[arg(long, default_value_t = 40)]
        horizon: usize,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run two scenarios over the same horizon and diff them
    Compare {
        /// First shock kind
        #[arg(long, value_enum)]
        shock_a: ShockArg,

        /// First shock amplitude in percent
        #[arg(long, default_value_t = 1.0)]
        amplitude_a: f64,

        /// Second shock kind
        #[arg(long, value_enum)]
        shock_b: ShockArg,

        /// Second shock amplitude in percent
        #[arg(long, default_value_t = 1.0)]
        amplitude_b: f64,

        /// Shared horizon in quarters (20 to 60)
        #[arg(long, default_value_t = 40)]
        horizon: usize,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Resolve and validate the calibration
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let calibration = cli.calibration.as_deref();

    match cli.command {
        Commands::Simulate {
            shock,
            amplitude,
            horizon,
            format,
            output,
        } => commands::simulate::run(
            shock.into(),
            amplitude,
            horizon,
            calibration,
            &format,
            output.as_deref(),
        ),
        Commands::Compare {
            shock_a,
            amplitude_a,
            shock_b,
            amplitude_b,
            horizon,
            format,
        } => commands::compare::run(
            shock_a.into(),
            amplitude_a,
            shock_b.into(),
            amplitude_b,
            horizon,
            calibration,
            &format,
        ),
        Commands::Check => commands::check::run(calibration),
    }
}
