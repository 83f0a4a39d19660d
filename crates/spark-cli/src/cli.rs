//! CLI argument definitions for the SPARK shell driver.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "spark",
    version,
    about = "SPARK Smart Parking - headless navigation shell driver",
    long_about = "Drive the SPARK parking viewer shell from the terminal.\n\n\
                  Runs scripted sessions against the mocked collaborators and prints\n\
                  the back-stack, the live parking lot and the parking history."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (default: platform config dir).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Skip login validation and the sign-in call.
    #[arg(long = "demo", global = true)]
    pub demo: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the route table.
    Routes,

    /// Run a full session: landing, login, live parking, history, logout.
    Walkthrough(WalkthroughArgs),

    /// Load the live parking lot.
    Live(LiveArgs),

    /// Load the parking history.
    History,

    /// Run one field validator.
    Validate(ValidateArgs),
}

#[derive(Parser)]
pub struct WalkthroughArgs {
    /// Email typed on the login screen.
    #[arg(long = "email", default_value = "barbaraneanake@ugm.ac.id")]
    pub email: String,

    /// Password typed on the login screen.
    #[arg(long = "password", default_value = "rahasia")]
    pub password: String,
}

#[derive(Parser)]
pub struct LiveArgs {
    /// Refresh the lot this many times before printing.
    #[arg(long = "refresh", value_name = "N", default_value_t = 0)]
    pub refresh: u32,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Which validator to run.
    #[arg(value_enum)]
    pub kind: ValidateKind,

    /// Value to check.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ValidateKind {
    Email,
    Password,
    Plate,
    Phone,
    Name,
    BirthDate,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
