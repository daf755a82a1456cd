//! CLI module for calc-api-check
//!
//! Provides the command-line interface for running the calculator API checks.

/// list subcommand
pub mod list;
/// run subcommand
pub mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// calc-api-check - Integration checks for a calculator HTTP API
#[derive(Parser, Debug)]
#[command(name = "calc-api-check")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    CALC_CHECK_BASE_URL        Live calculator service (default: http://localhost:5000)
    CALC_CHECK_MOCK_BASE_URL   Mock service for sqrt (default: http://localhost:9090)
    CALC_CHECK_TIMEOUT_SECS    Per-request timeout in seconds (default: 2)
    CALC_CHECK_LOG_LEVEL       Log level (default: info)
    CALC_CHECK_LOG_DIR         Directory for log files (default: none)
"#)]
pub struct Cli {
    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, global = true, env = "CALC_CHECK_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the checks against the configured services
    Run(run::RunArgs),
    /// List the available checks
    List,
}

/// Exit status when every case passed
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status when at least one case failed
pub const EXIT_CHECK_FAILED: u8 = 1;
/// Exit status for configuration or setup errors
pub const EXIT_SETUP_ERROR: u8 = 2;

/// Map the outcome of `run` to a process exit status
pub fn exit_status(result: &Result<bool, anyhow::Error>) -> u8 {
    match result {
        Ok(true) => EXIT_SUCCESS,
        Ok(false) => EXIT_CHECK_FAILED,
        Err(_) => EXIT_SETUP_ERROR,
    }
}
