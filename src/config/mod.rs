#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::OutputFormat;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "powcalc")]
#[command(about = "Integer exponentiation by repeated squaring")]
pub struct CliConfig {
    /// Base (defaults to 2)
    #[arg(long, allow_negative_numbers = true)]
    pub base: Option<i64>,

    /// Exponent, must be non-negative (defaults to 10)
    #[arg(long, allow_negative_numbers = true)]
    pub exponent: Option<i64>,

    /// Reduce the result modulo this value
    #[arg(long)]
    pub modulus: Option<u64>,

    /// Fail instead of wrapping when the result overflows i64
    #[arg(long)]
    pub checked: bool,

    /// Output format: plain or json
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Path to a TOML job file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}
