// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Progress logging for the pipeline.
//!
//! Writes prefixed diagnostic lines to stderr when verbose mode is on;
//! otherwise every call is a no-op. The logger is an explicit field on the
//! pipeline, never process-wide state.

pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print one diagnostic line to stderr.
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("[covercheck] {}", msg);
        }
    }
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
