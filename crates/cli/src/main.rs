//! Depocalc CLI - Deposit interest from the command line
//!
//! Usage:
//! ```bash
//! depocalc calculate --amount 100000 --months 12 --rate 8.5
//! depocalc --format json calculate --amount 1000 --months 1 --rate 12,0
//! echo '{"amount": 100000, "months": 12, "rate": 8.5}' | depocalc request
//! depocalc request --input request.json
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use depocalc_business::DepositService;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

mod commands;

use commands::{calculate, request};

/// Depocalc - Fixed-term deposit calculator with monthly compounding
#[derive(Parser)]
#[command(name = "depocalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, default_value = "text", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate total and profit of a deposit
    Calculate {
        /// Principal (1000.00 - 10000000.00), comma or dot separator
        #[arg(long, value_parser = parse_decimal_arg)]
        amount: Decimal,
        /// Term in months (1 - 60)
        #[arg(long)]
        months: u32,
        /// Annual rate in percent (1.00 - 20.00)
        #[arg(long, value_parser = parse_decimal_arg)]
        rate: Decimal,
    },

    /// Answer a JSON request body, as the web API does
    Request {
        /// Request file (reads stdin when omitted)
        #[arg(long, short)]
        input: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_decimal_arg(value: &str) -> Result<Decimal, String> {
    depocalc_core::parse_decimal(value).map_err(|e| e.to_string())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let service = DepositService::default();

    match cli.command {
        Commands::Calculate {
            amount,
            months,
            rate,
        } => calculate::run(&service, amount, months, rate, cli.format),

        Commands::Request { input } => request::run(&service, input.as_deref()),
    }
}
