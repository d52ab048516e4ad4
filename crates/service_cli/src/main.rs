//! bsm - Black-Scholes-Merton option pricer
//!
//! Prices a single European option from command-line inputs.
//!
//! # Usage
//!
//! ```text
//! bsm --model black_scholes --type call \
//!     --spot 100 --strike 105 --rate 0.05 --vol 0.2 --maturity 0.5
//! ```
//!
//! Add `--greeks` for delta, gamma, vega, theta and rho, and `--format json`
//! for machine-readable output. Settings may also come from a TOML file
//! (`--config`) or `BSM_*` environment variables.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate only parses inputs, loads
//! configuration and formats output; all pricing lives in `pricer_models`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::price::PriceArgs;
use config::{CliArgs, LogLevel};

/// Black-Scholes-Merton European option pricer
#[derive(Parser, Debug)]
#[command(name = "bsm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pricing model (black_scholes)
    #[arg(long)]
    model: Option<String>,

    /// Option type (call|put)
    #[arg(long = "type", default_value = "call")]
    option_type: String,

    /// Spot price of the underlying asset
    #[arg(long, allow_negative_numbers = true)]
    spot: f64,

    /// Strike price
    #[arg(long, allow_negative_numbers = true)]
    strike: f64,

    /// Risk-free rate (annual, continuously compounded)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rate: f64,

    /// Volatility (annual)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    vol: f64,

    /// Time to expiration (years)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    maturity: f64,

    /// Also compute delta, gamma, vega, theta and rho
    #[arg(long)]
    greeks: bool,

    /// Output format (table, json)
    #[arg(long)]
    format: Option<String>,

    /// Decimals printed in table output
    #[arg(long)]
    precision: Option<usize>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        CliArgs {
            config_file: self.config.clone(),
            output_format: self.format.clone(),
            precision: self.precision,
            log_level: self.log_level.clone(),
            verbose: self.verbose,
        }
    }

    fn price_args(&self) -> PriceArgs {
        PriceArgs {
            model: self.model.clone(),
            option_type: self.option_type.clone(),
            spot: self.spot,
            strike: self.strike,
            rate: self.rate,
            vol: self.vol,
            maturity: self.maturity,
            greeks: self.greeks,
        }
    }
}

/// Initialise tracing on stderr, preferring `RUST_LOG` over the configured level.
fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = config::build_config(&cli.config_args())?;
    init_tracing(config.log_level);

    debug!(
        format = %config.output_format,
        precision = config.precision,
        log_level = %config.log_level,
        "configuration loaded"
    );

    commands::price::run(&cli.price_args(), &config)
}

/// First line of a clap error without its `error: ` prefix.
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {}", CliError::InvalidArgument(clap_message(&err)));
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
