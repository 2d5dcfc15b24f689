//! Scripted interactive sessions.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use compass::cli::cmd_play;
use compass::cli::interactive::{Flow, Shell};
use compass_core::{Catalog, FundingInputs, Journey, Position};

fn play(script: &str) -> String {
    let mut out = Vec::new();
    cmd_play(
        script.as_bytes(),
        &mut out,
        Catalog::founder_journey(),
        FundingInputs::default(),
    )
    .unwrap();
    String::from_utf8(out).unwrap()
}

fn shell() -> Shell<Vec<u8>> {
    Shell::new(Journey::default(), FundingInputs::default(), Vec::new())
}

// =============================================================================
// FULL SESSIONS
// =============================================================================

#[test]
fn test_full_journey_script() {
    let output = play(
        "start\n\
         choose funding-source angel-investor\n\
         next\n\
         choose investor-type 3\n\
         next\n\
         choose business-model hybrid-model\n\
         next\n\
         quit\n",
    );

    assert!(output.contains("Welcome, Founder!"));
    assert!(output.contains("Total Funding Required: $455,400"));
    assert!(output.contains("Angel can typically cover your full $455,400 need"));
    assert!(output.contains("Your Choice: Micro VC"));
    assert!(output.contains("Journey Complete"));
    assert!(output.contains("Congratulations!"));
}

#[test]
fn test_end_of_input_ends_session() {
    let output = play("start\n");
    assert!(output.contains("Stage 1 of 3: Seed Stage"));
}

#[test]
fn test_bad_input_keeps_going() {
    let output = play("dance\nstart\nnext\nchoose funding-source 9\nstatus\n");
    assert!(output.contains("unknown command 'dance'"));
    assert!(output.contains(
        "Cannot do that: complete all scenarios to continue (missing: funding-source)"
    ));
    assert!(output.contains("Pick a number between 1 and 3 for 'funding-source'"));
    assert!(output.contains("Complete all scenarios to continue."));
}

// =============================================================================
// NAVIGATION
// =============================================================================

#[test]
fn test_back_and_forth() {
    let mut shell = shell();
    shell.handle("start").unwrap();
    shell.handle("back").unwrap();
    assert_eq!(shell.journey().position(), Position::OnStage(0));

    shell.handle("choose 1").unwrap();
    shell.handle("next").unwrap();
    assert_eq!(shell.journey().position(), Position::OnStage(1));

    shell.handle("back").unwrap();
    assert_eq!(shell.journey().position(), Position::OnStage(0));
    assert_eq!(shell.journey().decisions_made(), 1);
}

#[test]
fn test_choose_before_start_is_refused() {
    let mut shell = shell();
    assert_eq!(shell.handle("choose funding-source 1").unwrap(), Flow::Continue);
    assert_eq!(shell.journey().decisions_made(), 0);
    let out = String::from_utf8(shell.into_output()).unwrap();
    assert!(out.contains("the journey has not started yet"));
}

#[test]
fn test_reset_clears_progress() {
    let mut shell = shell();
    shell.handle("start").unwrap();
    shell.handle("choose 2").unwrap();
    shell.handle("reset").unwrap();
    assert_eq!(shell.journey().position(), Position::NotStarted);
    assert_eq!(shell.journey().decisions_made(), 0);
}

// =============================================================================
// ESTIMATOR
// =============================================================================

#[test]
fn test_set_updates_funding() {
    let mut shell = shell();
    shell.handle("start").unwrap();
    shell.handle("set team 5").unwrap();
    assert_eq!(shell.inputs().team_size(), 5);
    assert_eq!(shell.journey().funding().map(|f| f.total()), Some(690_000));

    let out = String::from_utf8(shell.into_output()).unwrap();
    assert!(out.contains("Team Size set to 5. Total Funding Required: $690,000"));
}

#[test]
fn test_estimate_command_prints_breakdown() {
    let mut shell = shell();
    shell.handle("set complexity simple").unwrap();
    shell.handle("estimate").unwrap();
    let out = String::from_utf8(shell.into_output()).unwrap();
    assert!(out.contains("Simple (MVP with core features)"));
    assert!(out.contains("Product Development"));
}
