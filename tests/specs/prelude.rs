//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the covercheck binary
pub fn covercheck_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("covercheck"))
}

/// A stand-in `go` binary placed on PATH.
///
/// The script writes a canned cover profile to whatever `-coverprofile`
/// path it is handed, echoes a test-runner-ish line, and exits with the
/// configured code.
pub struct FakeGo {
    dir: TempDir,
}

impl FakeGo {
    pub fn new(profile: &str, exit_code: i32) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let script = format!(
            r#"#!/bin/sh
profile=""
prev=""
for arg in "$@"; do
  if [ "$prev" = "-coverprofile" ]; then
    profile="$arg"
  fi
  prev="$arg"
done
if [ -n "$profile" ]; then
  cat > "$profile" <<'PROFILE'
{profile}
PROFILE
fi
echo "ok  	example.com/pkg/demo	0.01s"
exit {exit_code}
"#
        );

        let path = dir.path().join("go");
        fs::write(&path, script).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();

        Self { dir }
    }

    /// PATH value that resolves `go` to the fake toolchain first.
    pub fn path_env(&self) -> String {
        format!(
            "{}:{}",
            self.dir.path().display(),
            std::env::var("PATH").unwrap_or_default()
        )
    }
}
