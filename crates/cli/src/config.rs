// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration, assembled once from parsed CLI arguments and passed
//! into the pipeline. No global state.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::Error;
use crate::redirect::Redirect;

#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum coverage percentage; 0 means "always pass".
    pub required_coverage: f64,
    pub race: bool,
    /// Forwarded verbatim to the test command, which validates it.
    pub timeout: Option<String>,
    pub parallel: Option<u32>,
    /// Explicit profile path; `None` means a temp file owned by the run.
    pub coverprofile: Option<PathBuf>,
    pub stdout: Redirect,
    pub stderr: Redirect,
    pub verbose: bool,
    /// Trailing arguments handed to the test command unmodified.
    pub args: Vec<String>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, Error> {
        if !(0.0..=100.0).contains(&cli.required_coverage) {
            return Err(Error::Config(format!(
                "required coverage must be between 0 and 100, got {}",
                cli.required_coverage
            )));
        }

        Ok(Self {
            required_coverage: cli.required_coverage,
            race: cli.race,
            timeout: cli.timeout,
            // go test treats 0 as unset; so do we.
            parallel: cli.parallel.filter(|p| *p > 0),
            coverprofile: cli.coverprofile,
            stdout: Redirect::parse(&cli.stdout),
            stderr: Redirect::parse(&cli.stderr),
            verbose: cli.verbose,
            args: cli.args,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            required_coverage: 0.0,
            race: false,
            timeout: None,
            parallel: None,
            coverprofile: None,
            stdout: Redirect::Discard,
            stderr: Redirect::Discard,
            verbose: false,
            args: Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
