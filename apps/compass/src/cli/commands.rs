//! # CLI Command Implementations
//!
//! Every command writes to the supplied writer so it can be driven from
//! tests as well as from stdout.

use super::EstimateArgs;
use super::interactive::Shell;
use crate::{AppError, render};
use compass_core::{Catalog, FundingInputs, Journey, JourneyProgress, Transition, estimate};
use std::io::{BufRead, Write};

fn write_json(out: &mut dyn Write, value: &serde_json::Value) -> Result<(), AppError> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

// =============================================================================
// PLAY COMMAND
// =============================================================================

/// Run an interactive session until `quit` or end of input.
pub fn cmd_play<R: BufRead, W: Write>(
    input: R,
    out: W,
    catalog: Catalog,
    inputs: FundingInputs,
) -> Result<(), AppError> {
    tracing::debug!(
        "Starting interactive session: {} stages, {} scenarios",
        catalog.len(),
        catalog.scenario_count()
    );
    let mut shell = Shell::new(Journey::new(catalog), inputs, out);
    shell.run(input)?;
    tracing::debug!(
        "Session ended with {} decisions",
        shell.journey().decisions_made()
    );
    Ok(())
}

// =============================================================================
// ESTIMATE COMMAND
// =============================================================================

/// Print a one-shot funding estimate.
pub fn cmd_estimate(
    out: &mut dyn Write,
    mut inputs: FundingInputs,
    args: &EstimateArgs,
    json_mode: bool,
) -> Result<(), AppError> {
    args.apply(&mut inputs)?;
    let result = estimate(&inputs);
    tracing::debug!("Estimated total {} for {:?}", result.total(), inputs);

    if json_mode {
        let breakdown: Vec<serde_json::Value> = result
            .breakdown()
            .iter()
            .map(|item| {
                serde_json::json!({
                    "category": item.category.label(),
                    "amount": item.amount.to_string(),
                    "share_permille": result.share_permille(item.category),
                    "color": item.category.color(),
                })
            })
            .collect();
        let output = serde_json::json!({
            "inputs": serde_json::to_value(inputs)?,
            "total": result.total(),
            "breakdown": breakdown,
        });
        return write_json(out, &output);
    }

    write!(out, "{}", render::funding_panel(&result))?;
    Ok(())
}

// =============================================================================
// STAGES COMMAND
// =============================================================================

/// Print the stage overview.
pub fn cmd_stages(out: &mut dyn Write, catalog: &Catalog, json_mode: bool) -> Result<(), AppError> {
    if json_mode {
        let stages: Vec<serde_json::Value> = catalog
            .stages()
            .iter()
            .map(|stage| {
                serde_json::json!({
                    "id": stage.id,
                    "title": stage.title,
                    "focus": stage.focus,
                    "overview": stage.overview,
                    "scenarios": stage
                        .scenarios
                        .iter()
                        .map(|s| s.key.as_str())
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        return write_json(out, &serde_json::json!({ "stages": stages }));
    }

    write!(out, "{}", render::welcome(catalog))?;
    Ok(())
}

// =============================================================================
// WALK COMMAND
// =============================================================================

/// Split `scenario=choice`.
pub fn parse_decision(raw: &str) -> Result<(&str, &str), AppError> {
    match raw.split_once('=') {
        Some((scenario, choice)) if !scenario.trim().is_empty() && !choice.trim().is_empty() => {
            Ok((scenario.trim(), choice.trim()))
        }
        _ => Err(AppError::InvalidDecision(raw.to_string())),
    }
}

/// Walk the journey from a list of decisions.
///
/// The journey advances whenever its current stage is complete. Refused
/// choices are reported and the walk carries on.
pub fn cmd_walk(
    out: &mut dyn Write,
    catalog: Catalog,
    inputs: FundingInputs,
    raw_decisions: &[String],
    json_mode: bool,
) -> Result<(), AppError> {
    let decisions = raw_decisions
        .iter()
        .map(|raw| parse_decision(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let mut journey = Journey::new(catalog);
    let _ = journey.start();
    let _ = journey.update_funding(&inputs);

    let mut refusals = Vec::new();
    for (scenario, choice) in decisions {
        if let Transition::Refused(reason) = journey.record_choice(scenario, choice) {
            tracing::info!("Refused {}={}: {}", scenario, choice, reason);
            refusals.push(serde_json::json!({
                "scenario": scenario,
                "choice": choice,
                "reason": reason.to_string(),
            }));
            continue;
        }
        while journey.can_advance() {
            let _ = journey.advance();
        }
    }

    let progress = JourneyProgress::from_journey(&journey);

    if json_mode {
        let decisions: serde_json::Map<String, serde_json::Value> = journey
            .progress()
            .choices()
            .iter()
            .map(|(s, c)| (s.to_string(), serde_json::Value::String(c.to_string())))
            .collect();
        let output = serde_json::json!({
            "progress": serde_json::to_value(&progress)?,
            "decisions": decisions,
            "refused": refusals,
            "funding_total": journey.funding().map(|f| f.total()),
            "missing": journey
                .current_index()
                .map(|i| journey.missing_scenarios(i))
                .unwrap_or_default(),
        });
        return write_json(out, &output);
    }

    for refusal in &refusals {
        writeln!(
            out,
            "Refused {}={}: {}",
            refusal["scenario"].as_str().unwrap_or_default(),
            refusal["choice"].as_str().unwrap_or_default(),
            refusal["reason"].as_str().unwrap_or_default()
        )?;
    }
    write!(out, "{}", render::progress_strip(&journey))?;
    writeln!(out)?;
    write!(out, "{}", render::journey_summary(&journey))?;
    writeln!(out)?;
    write!(out, "{}", render::navigation(&journey))?;
    writeln!(out, "Progress: {}%", progress.percent)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_walk(raw_decisions: &[&str], json_mode: bool) -> String {
        let raw_decisions: Vec<String> = raw_decisions.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        cmd_walk(
            &mut out,
            Catalog::founder_journey(),
            FundingInputs::default(),
            &raw_decisions,
            json_mode,
        )
        .expect("walk");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn decision_parsing() {
        assert_eq!(
            parse_decision("funding-source=bootstrap").expect("valid"),
            ("funding-source", "bootstrap")
        );
        assert!(parse_decision("funding-source").is_err());
        assert!(parse_decision("=bootstrap").is_err());
        assert!(parse_decision("funding-source=").is_err());
    }

    #[test]
    fn walk_completes_journey() {
        let text = run_walk(
            &[
                "funding-source=angel-investor",
                "investor-type=micro-vc",
                "business-model=hybrid-model",
            ],
            false,
        );
        assert!(text.contains("Congratulations!"));
        assert!(text.contains("Progress: 100%"));
    }

    #[test]
    fn walk_reports_refusals_in_json() {
        let text = run_walk(&["funding-source=lottery", "funding-source=bootstrap"], true);
        let value: serde_json::Value = serde_json::from_str(&text).expect("json");
        assert_eq!(value["refused"][0]["choice"], "lottery");
        assert_eq!(value["decisions"]["funding-source"], "bootstrap");
        assert_eq!(value["progress"]["current"], 1);
        assert_eq!(value["funding_total"], 455_400);
        assert_eq!(value["missing"][0], "investor-type");
    }

    #[test]
    fn estimate_json_has_breakdown() {
        let args = EstimateArgs {
            team_size: Some(5),
            ..EstimateArgs::default()
        };
        let mut out = Vec::new();
        cmd_estimate(&mut out, FundingInputs::default(), &args, true).expect("estimate");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("json");
        assert_eq!(value["inputs"]["team_size"], 5);
        assert_eq!(value["breakdown"].as_array().map(Vec::len), Some(6));
        assert_eq!(value["breakdown"][0]["amount"], "425000");
    }

    #[test]
    fn estimate_rejects_out_of_range() {
        let args = EstimateArgs {
            timeline: Some(7),
            ..EstimateArgs::default()
        };
        let mut out = Vec::new();
        assert!(cmd_estimate(&mut out, FundingInputs::default(), &args, false).is_err());
        assert!(out.is_empty());
    }
}
