// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test command orchestration.
//!
//! Builds the `go test` invocation, runs it with the configured stream
//! redirects, then gates on the measured statement coverage. The whole
//! run is synchronous: spawn, wait, parse, decide.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tempfile::NamedTempFile;

use crate::config::Config;
use crate::error::Error;
use crate::profile;
use crate::threshold;
use crate::verbose::VerboseLogger;

/// Executes a prepared command and reports its exit status.
///
/// Injected into the pipeline so tests can substitute a fake without
/// spawning real processes.
pub trait CommandRunner {
    fn run(&self, cmd: &mut Command) -> io::Result<ExitStatus>;
}

/// Runs the command as a real child process, blocking until it exits.
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, cmd: &mut Command) -> io::Result<ExitStatus> {
        cmd.status()
    }
}

/// One configured covercheck run.
pub struct CoverageCheck<R> {
    config: Config,
    log: VerboseLogger,
    runner: R,
}

impl CoverageCheck<ProcessRunner> {
    pub fn new(config: Config) -> Self {
        Self::with_runner(config, ProcessRunner)
    }
}

impl<R: CommandRunner> CoverageCheck<R> {
    pub fn with_runner(config: Config, runner: R) -> Self {
        let log = VerboseLogger::new(config.verbose);
        Self { config, log, runner }
    }

    /// Run the full pipeline: spawn the test command, wait for it, parse
    /// the coverage profile, and enforce the required threshold.
    ///
    /// A test command that fails to start or exits non-zero short-circuits
    /// with its own error; coverage is only evaluated after a clean run.
    pub fn run(&self) -> Result<(), Error> {
        // The guard owns the temp profile; dropping it on any exit path
        // removes the file.
        let (profile_path, _temp_guard) = self.resolve_profile_path()?;

        let mut cmd = self.test_command(&profile_path)?;
        self.log.log(&format!("running {:?}", cmd));
        tracing::debug!("spawning test command: {:?}", cmd);

        let status = self.runner.run(&mut cmd).map_err(Error::Spawn)?;
        if !status.success() {
            return Err(Error::TestsFailed(status.to_string()));
        }
        self.log.log("test command finished");

        let coverage =
            profile::statement_coverage(&profile_path).map_err(|source| Error::Profile {
                path: profile_path.clone(),
                source,
            })?;
        self.log.log(&format!("calculated coverage {:.2}", coverage));

        let package = profile::guess_package(&profile_path);
        threshold::enforce(coverage, self.config.required_coverage, &package)
    }

    /// The profile path to hand to the test command, plus the temp-file
    /// guard when the caller did not name one.
    fn resolve_profile_path(&self) -> Result<(PathBuf, Option<NamedTempFile>), Error> {
        if let Some(path) = &self.config.coverprofile {
            return Ok((path.clone(), None));
        }
        let temp = tempfile::Builder::new()
            .prefix("covercheck")
            .suffix(".cover")
            .tempfile()
            .map_err(Error::TempProfile)?;
        let path = temp.path().to_path_buf();
        self.log.log(&format!("coverprofile: {}", path.display()));
        Ok((path, Some(temp)))
    }

    /// Assemble the `go test` invocation for this configuration.
    fn test_command(&self, profile_path: &Path) -> Result<Command, Error> {
        let mut cmd = Command::new("go");
        cmd.arg("test").args(["-covermode", "atomic"]);
        if self.config.race {
            cmd.arg("-race");
        }
        if let Some(timeout) = &self.config.timeout {
            cmd.arg("-timeout").arg(timeout);
        }
        if let Some(parallel) = self.config.parallel {
            cmd.arg("-parallel").arg(parallel.to_string());
        }
        cmd.arg("-coverprofile").arg(profile_path);
        cmd.args(&self.config.args);

        cmd.stdout(self.config.stdout.open().map_err(|source| Error::Redirect {
            stream: "stdout",
            source,
        })?);
        cmd.stderr(self.config.stderr.open().map_err(|source| Error::Redirect {
            stream: "stderr",
            source,
        })?);

        Ok(cmd)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
