//! Command-line parsing tests.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use clap::Parser;
use compass::cli::{Cli, Commands, EstimateArgs};
use compass_core::{Complexity, FundingInputs, MarketStrategy};
use std::path::PathBuf;

// =============================================================================
// GLOBAL OPTIONS
// =============================================================================

#[test]
fn test_no_command_defaults_to_play() {
    let cli = Cli::try_parse_from(["compass"]).unwrap();
    assert!(cli.command.is_none());
    assert!(!cli.verbose);
    assert!(!cli.quiet);
    assert!(!cli.json_mode);
    assert!(cli.config.is_none());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["compass", "stages", "-q", "--json-mode", "-c", "my.toml"])
        .unwrap();
    assert!(matches!(cli.command, Some(Commands::Stages)));
    assert!(cli.quiet);
    assert!(cli.json_mode);
    assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
}

// =============================================================================
// ESTIMATE
// =============================================================================

#[test]
fn test_estimate_arguments() {
    let cli = Cli::try_parse_from([
        "compass",
        "estimate",
        "--team-size",
        "5",
        "--timeline",
        "18",
        "--complexity",
        "complex",
        "--strategy",
        "global",
    ])
    .unwrap();

    let Some(Commands::Estimate(args)) = cli.command else {
        panic!("expected estimate command");
    };
    assert_eq!(args.team_size, Some(5));
    assert_eq!(args.timeline, Some(18));
    assert_eq!(args.salary, None);
    assert_eq!(args.complexity, Some(Complexity::Complex));
    assert_eq!(args.strategy, Some(MarketStrategy::Global));
}

#[test]
fn test_estimate_rejects_unknown_variant() {
    let result = Cli::try_parse_from(["compass", "estimate", "--complexity", "rocket-science"]);
    assert!(result.is_err());
}

#[test]
fn test_estimate_args_apply_over_defaults() {
    let args = EstimateArgs {
        salary: Some(120_000),
        ..EstimateArgs::default()
    };
    let mut inputs = FundingInputs::default();
    args.apply(&mut inputs).unwrap();
    assert_eq!(inputs.avg_salary(), 120_000);
    assert_eq!(inputs.team_size(), 3);
}

#[test]
fn test_estimate_args_out_of_range() {
    let args = EstimateArgs {
        team_size: Some(40),
        ..EstimateArgs::default()
    };
    let mut inputs = FundingInputs::default();
    assert!(args.apply(&mut inputs).is_err());
    assert_eq!(inputs, FundingInputs::default());
}

// =============================================================================
// WALK
// =============================================================================

#[test]
fn test_walk_collects_repeated_choices() {
    let cli = Cli::try_parse_from([
        "compass",
        "walk",
        "--choose",
        "funding-source=bootstrap",
        "--choose",
        "investor-type=micro-vc",
    ])
    .unwrap();

    let Some(Commands::Walk { choices }) = cli.command else {
        panic!("expected walk command");
    };
    assert_eq!(
        choices,
        vec![
            "funding-source=bootstrap".to_string(),
            "investor-type=micro-vc".to_string()
        ]
    );
}
