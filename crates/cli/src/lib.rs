// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! covercheck wraps a `go test` run, captures a coverage profile, and
//! fails when aggregate statement coverage is below a required threshold.
//!
//! The pipeline is a single linear pass: configure, spawn the test
//! command, wait, parse the profile, aggregate, decide, report.

pub mod cli;
pub mod config;
pub mod error;
pub mod profile;
pub mod redirect;
pub mod runner;
pub mod threshold;
pub mod verbose;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Error;
use crate::runner::CoverageCheck;

/// Run one covercheck invocation from parsed CLI arguments.
pub fn run(cli: Cli) -> Result<(), Error> {
    let config = Config::from_cli(cli)?;
    CoverageCheck::new(config).run()
}
