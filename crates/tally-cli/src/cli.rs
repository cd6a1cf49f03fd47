use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Four-function calculator
#[derive(Parser, Debug)]
#[command(name = "tally", version)]
#[command(about = "Create and execute add, subtract, multiply and divide calculations")]
pub struct TallyCli {
    /// Configuration file (defaults to $TALLY_CONFIG_PATH, then tally.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive, overrides $TALLY_LOG and the configuration file
    #[arg(long, global = true)]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create and execute a single calculation
    Calc(CalcArgs),
    /// List the registered calculation types
    List,
    /// Start an interactive session
    Repl(ReplArgs),
}

/// Arguments for calc command
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Calculation type, case-insensitive (add, subtract, multiply, divide)
    pub identifier: String,

    /// First operand
    #[arg(allow_negative_numbers = true)]
    pub a: f64,

    /// Second operand
    #[arg(allow_negative_numbers = true)]
    pub b: f64,

    /// Output format, overrides the configuration file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Arguments for repl command
#[derive(Args, Debug)]
pub struct ReplArgs {
    /// Output format, overrides the configuration file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}
