//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

/// Trip CO2e calculator
#[derive(Debug, Parser)]
#[command(name = "co2-calculator")]
#[command(
    author,
    version,
    about = "Compute the CO2-equivalent emitted by a trip between two cities",
    long_about = None
)]
pub struct Cli {
    /// City the trip starts in
    #[arg(long, required_unless_present = "list_methods")]
    pub start: Option<String>,

    /// City the trip ends in
    #[arg(long, required_unless_present = "list_methods")]
    pub end: Option<String>,

    /// Transport method key, e.g. diesel-car-medium (case-insensitive)
    #[arg(long, required_unless_present = "list_methods")]
    pub transportation_method: Option<String>,

    /// Print every supported transport method with its emission factor
    #[arg(long, conflicts_with_all = ["start", "end", "transportation_method"])]
    pub list_methods: bool,

    /// Configuration file to read instead of ./co2-calculator.{toml,yaml,json}
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// OpenRouteService API token
    #[arg(long, env = "ORS_TOKEN", hide_env_values = true)]
    pub ors_token: Option<String>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Determine log filter level from verbosity count
pub const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
