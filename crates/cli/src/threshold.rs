// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage threshold decision.

use crate::error::Error;

/// Tolerance absorbing float rounding noise from the percentage
/// computation: a measured 79.999 passes a required 80.0.
pub const EPSILON: f64 = 0.001;

/// Whether a measured coverage satisfies the required minimum.
pub fn passes(coverage: f64, required: f64) -> bool {
    coverage + EPSILON >= required
}

/// Enforce the required minimum, labelling a failure with the package
/// under test.
pub fn enforce(coverage: f64, required: f64, package: &str) -> Result<(), Error> {
    if passes(coverage, required) {
        return Ok(());
    }
    Err(Error::BelowThreshold {
        package: package.to_string(),
        coverage,
        required,
    })
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
