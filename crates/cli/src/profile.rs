// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Go cover-profile parsing and statement aggregation.
//!
//! The profile is a text artifact produced by the test runner: a `mode:`
//! header line, then one block record per line in the form
//! `<file>:<start_line>.<start_col>,<end_line>.<end_col> <numStatements> <count>`.
//! Only the statement and execution counts matter for aggregation.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors produced while reading or parsing a cover profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("missing mode header on line 1")]
    MissingHeader,

    #[error("malformed block record on line {line}: {text:?}")]
    MalformedLine { line: usize, text: String },
}

/// One coverage-tracked unit of code: `statements` statements that were
/// executed `count` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub statements: u64,
    pub count: u64,
}

impl Block {
    /// A block is covered when it was exercised at least once; it then
    /// contributes its full statement count to the covered total.
    pub fn is_covered(&self) -> bool {
        self.count > 0
    }
}

/// Parse a single block record, returning the file path and block counts.
/// Returns `None` for anything that does not match the profile format.
pub fn parse_block_line(line: &str) -> Option<(&str, Block)> {
    let (range, counts) = line.split_once(' ')?;
    // The range token is `<file>:<start>.<col>,<end>.<col>`; the file path
    // itself may contain colons, so split on the last one.
    let (file, _positions) = range.rsplit_once(':')?;

    let mut fields = counts.split_ascii_whitespace();
    let statements = fields.next()?.parse().ok()?;
    let count = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }

    Some((file, Block { statements, count }))
}

/// Aggregate statement coverage over the full profile text.
///
/// Returns the covered percentage in [0, 100]. A profile with no
/// statements at all yields exactly 0.0; this mirrors the upstream tool
/// and is a policy choice rather than a "0% covered" measurement.
pub fn aggregate(content: &str) -> Result<f64, ProfileError> {
    let mut lines = content.lines().enumerate();
    match lines.next() {
        // An empty profile has nothing to measure.
        None => return Ok(0.0),
        Some((_, header)) if header.starts_with("mode:") => {}
        Some(_) => return Err(ProfileError::MissingHeader),
    }

    let mut total: u64 = 0;
    let mut covered: u64 = 0;
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let (_, block) =
            parse_block_line(line).ok_or_else(|| ProfileError::MalformedLine {
                line: idx + 1,
                text: line.to_string(),
            })?;
        total += block.statements;
        if block.is_covered() {
            covered += block.statements;
        }
    }

    if total == 0 {
        return Ok(0.0);
    }
    tracing::debug!("aggregated {covered}/{total} covered statements");
    Ok(covered as f64 / total as f64 * 100.0)
}

/// Read a cover profile from disk and aggregate it.
pub fn statement_coverage(path: &Path) -> Result<f64, ProfileError> {
    let content = fs::read_to_string(path)?;
    aggregate(&content)
}

/// Best-effort label for the package under test, derived from the first
/// block record of the profile. Any failure along the way (unreadable
/// file, fewer than two lines, no `:` separator) silently yields the
/// empty label; this lookup is advisory and never aborts the run.
pub fn guess_package(path: &Path) -> String {
    let Ok(content) = fs::read_to_string(path) else {
        return String::new();
    };
    let Some(record) = content.lines().nth(1) else {
        return String::new();
    };
    let Some((file, _)) = record.split_once(':') else {
        return String::new();
    };
    match Path::new(file).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_string_lossy().into_owned(),
        // A bare filename has no directory portion.
        _ => ".".to_string(),
    }
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
