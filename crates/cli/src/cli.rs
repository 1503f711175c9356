//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

/// Run a Go test command and fail when statement coverage is below a
/// required threshold
#[derive(Parser)]
#[command(name = "covercheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Minimum statement coverage percentage required for a zero exit code
    #[arg(
        long,
        default_value_t = 0.0,
        value_name = "PCT",
        env = "COVERCHECK_REQUIRED_COVERAGE"
    )]
    pub required_coverage: f64,

    /// Enable the race detector
    #[arg(long)]
    pub race: bool,

    /// Test timeout, forwarded to the test command (e.g. "30s", "10m")
    #[arg(long, value_name = "DURATION")]
    pub timeout: Option<String>,

    /// Maximum number of tests to run in parallel
    #[arg(long, value_name = "N")]
    pub parallel: Option<u32>,

    /// Coverage profile output path (default: a temp file, removed after the run)
    #[arg(long, value_name = "PATH")]
    pub coverprofile: Option<PathBuf>,

    /// Child stdout target: "-" passes through, "" discards, else a file path
    #[arg(long, default_value = "", hide_default_value = true, value_name = "TARGET")]
    pub stdout: String,

    /// Child stderr target: "-" passes through, "" discards, else a file path
    #[arg(long, default_value = "", hide_default_value = true, value_name = "TARGET")]
    pub stderr: String,

    /// Log pipeline diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Remaining arguments are passed to the test command (e.g. ./...)
    #[arg(value_name = "ARG", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
