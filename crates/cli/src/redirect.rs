// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output redirection for the child test command.
//!
//! Each child stream has a target spelled as a flag value: `-` inherits
//! the parent stream, the empty string discards everything, and anything
//! else is a file path.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;

/// Where a child process stream goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    /// Pass through to the parent's stream.
    Inherit,
    /// Accept and discard all writes.
    Discard,
    /// Create (truncating) and write to this file.
    File(PathBuf),
}

impl Redirect {
    pub fn parse(spec: &str) -> Self {
        match spec {
            "-" => Redirect::Inherit,
            "" => Redirect::Discard,
            path => Redirect::File(PathBuf::from(path)),
        }
    }

    /// Open the redirect target for wiring into a child process.
    pub fn open(&self) -> io::Result<Stdio> {
        match self {
            Redirect::Inherit => Ok(Stdio::inherit()),
            Redirect::Discard => Ok(Stdio::null()),
            Redirect::File(path) => Ok(Stdio::from(File::create(path)?)),
        }
    }
}

#[cfg(test)]
#[path = "redirect_tests.rs"]
mod tests;
