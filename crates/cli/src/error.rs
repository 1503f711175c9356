// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for a covercheck run.
//!
//! Every failure is terminal for the invocation: errors carry the failing
//! operation as context and bubble unmodified to the top level, where the
//! full chain is printed as a single line.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::profile::ProfileError;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed flag values caught before anything runs.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("cannot create coverage profile temp file")]
    TempProfile(#[source] io::Error),

    #[error("cannot open {stream} redirect file")]
    Redirect {
        stream: &'static str,
        #[source]
        source: io::Error,
    },

    /// The test command could not be started at all.
    #[error("cannot run test command")]
    Spawn(#[source] io::Error),

    /// The test command ran and exited non-zero.
    #[error("test command failed: {0}")]
    TestsFailed(String),

    #[error("cannot load coverage profile file {}", path.display())]
    Profile {
        path: PathBuf,
        #[source]
        source: ProfileError,
    },

    /// Coverage was computed but fell short of the required minimum.
    /// The message shape is consumed by CI annotation parsers.
    #[error("{package}::warning:Code coverage {coverage:.3} less than required {required:.3}")]
    BelowThreshold {
        package: String,
        coverage: f64,
        required: f64,
    },
}
