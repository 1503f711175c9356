// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use clap::Parser;

use super::Cli;

#[test]
fn defaults_match_flag_documentation() {
    let cli = Cli::try_parse_from(["covercheck"]).unwrap();

    assert_eq!(cli.required_coverage, 0.0);
    assert!(!cli.race);
    assert!(cli.timeout.is_none());
    assert!(cli.parallel.is_none());
    assert!(cli.coverprofile.is_none());
    assert_eq!(cli.stdout, "");
    assert_eq!(cli.stderr, "");
    assert!(!cli.verbose);
    assert!(cli.args.is_empty());
}

#[test]
fn parses_all_flags() {
    let cli = Cli::try_parse_from([
        "covercheck",
        "--required-coverage",
        "80.5",
        "--race",
        "--timeout",
        "30s",
        "--parallel",
        "4",
        "--coverprofile",
        "cover.out",
        "--stdout",
        "-",
        "--stderr",
        "err.log",
        "--verbose",
    ])
    .unwrap();

    assert_eq!(cli.required_coverage, 80.5);
    assert!(cli.race);
    assert_eq!(cli.timeout.as_deref(), Some("30s"));
    assert_eq!(cli.parallel, Some(4));
    assert_eq!(cli.coverprofile.as_deref().unwrap().to_str(), Some("cover.out"));
    assert_eq!(cli.stdout, "-");
    assert_eq!(cli.stderr, "err.log");
    assert!(cli.verbose);
}

#[test]
fn trailing_arguments_pass_through() {
    let cli = Cli::try_parse_from(["covercheck", "./...", "-run", "TestFoo"]).unwrap();

    assert_eq!(cli.args, vec!["./...", "-run", "TestFoo"]);
}

#[test]
fn rejects_non_numeric_threshold() {
    assert!(Cli::try_parse_from(["covercheck", "--required-coverage", "lots"]).is_err());
}
