//! # Text Rendering
//!
//! Plain-text views of the catalog, the journey and the funding estimate.
//! Every function returns a `String`; writing it out is the caller's job.

use compass_core::{
    Catalog, Choice, FundingEstimate, Journey, Scenario, StageStatus, format_dollars,
    format_permille,
};

const RULE: &str = "------------------------------------------------------------";

const CONGRATULATIONS: &str = "Congratulations! You've navigated through all the critical \
                               financial decisions of your startup journey.";

/// Topics listed on the welcome screen.
const LEARNING_TOPICS: [&str; 5] = [
    "Funding Strategies",
    "Investor Relations",
    "Cash Flow Management",
    "Business Model Design",
    "Risk Assessment",
];

// =============================================================================
// WELCOME
// =============================================================================

/// Welcome screen with an overview of every stage.
pub fn welcome(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("The Founder's Financial Compass\n");
    out.push_str("Navigate the critical financial decisions of your startup journey\n\n");
    out.push_str("Welcome, Founder!\n");
    out.push_str(
        "You're about to embark on a journey through the most critical financial decisions\n\
         every startup founder faces. Each choice you make will shape your company's future,\n\
         from seed funding to scaling success.\n\n",
    );

    for (i, stage) in catalog.stages().iter().enumerate() {
        out.push_str(&format!("  {}. {}", i + 1, stage.title));
        if !stage.focus.is_empty() {
            out.push_str(&format!(" [{}]", stage.focus));
        }
        out.push('\n');
        if !stage.overview.is_empty() {
            out.push_str(&format!("     {}\n", stage.overview));
        }
    }

    out.push_str(&format!(
        "\nWhat You'll Learn: {}\n",
        LEARNING_TOPICS.join(" | ")
    ));
    out
}

// =============================================================================
// PROGRESS STRIP
// =============================================================================

fn status_marker(status: StageStatus) -> &'static str {
    match status {
        StageStatus::Completed => "[x]",
        StageStatus::Current => "[>]",
        StageStatus::Upcoming => "[ ]",
    }
}

/// One-line stage strip plus a position line.
pub fn progress_strip(journey: &Journey) -> String {
    let catalog = journey.catalog();
    let strip: Vec<String> = catalog
        .stages()
        .iter()
        .enumerate()
        .map(|(i, stage)| {
            let status = journey.stage_status(i);
            format!("{} {} ({})", status_marker(status), stage.title, status)
        })
        .collect();

    let position = match (journey.current_index(), journey.current_stage()) {
        (Some(i), Some(stage)) => {
            format!("Stage {} of {}: {}", i + 1, catalog.len(), stage.title)
        }
        _ => "Journey not started".to_string(),
    };

    format!(
        "{}\n{} | {} decisions made\n",
        strip.join(" -> "),
        position,
        journey.decisions_made()
    )
}

// =============================================================================
// STAGE AND SCENARIOS
// =============================================================================

/// The current stage with all of its scenario cards.
pub fn stage_view(journey: &Journey) -> String {
    let Some(stage) = journey.current_stage() else {
        return welcome(journey.catalog());
    };

    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("{}\n{}\n", stage.title, stage.description));
    for scenario in &stage.scenarios {
        out.push('\n');
        if scenario.hosts_estimator {
            if let Some(estimate) = journey.funding() {
                out.push_str(&funding_panel(estimate));
                out.push('\n');
            }
        }
        out.push_str(&scenario_card(journey, scenario));
    }
    out
}

/// A scenario with its choices, or with the recorded choice and its result.
pub fn scenario_card(journey: &Journey, scenario: &Scenario) -> String {
    let mut out = String::new();
    let selected = journey.selected_choice(scenario.key.as_str());

    out.push_str(&format!("== {}", scenario.title));
    if selected.is_some() {
        out.push_str(" [Decision Made]");
    }
    out.push_str(&format!(" ({})\n", scenario.key));
    out.push_str(&format!("{}\n", scenario.description));

    if scenario.hosts_estimator {
        if let Some(total) = journey.funding().map(FundingEstimate::total).filter(|t| *t > 0) {
            out.push_str(&format!(
                "Calculated funding needed: {}\n",
                format_dollars(total)
            ));
        }
    }

    match selected {
        None => {
            out.push_str("Choose your approach:\n");
            for (i, choice) in scenario.choices.iter().enumerate() {
                out.push_str(&format!(
                    "  {}) {} [{}] ({})\n     {}\n",
                    i + 1,
                    choice.title,
                    choice.impact.badge(),
                    choice.key,
                    choice.description
                ));
            }
        }
        Some(choice) => {
            out.push_str(&format!(
                "Your Choice: {} [{}]\n  {}\n",
                choice.title,
                choice.impact.badge(),
                choice.description
            ));
            if journey.progress().is_result_shown(scenario.key.as_str()) {
                out.push_str(&choice_result(journey, scenario, choice));
            }
        }
    }
    out
}

/// Decision analysis for a recorded choice.
pub fn choice_result(journey: &Journey, scenario: &Scenario, choice: &Choice) -> String {
    let mut out = String::new();
    out.push_str("\nDecision Analysis\n");
    out.push_str(&format!("  Immediate Impact: {}\n", choice.immediate_implication));
    out.push_str(&format!("  Long-term Impact: {}\n", choice.long_term_implication));

    let notes = journey.guidance_notes(scenario.key.as_str());
    if !notes.is_empty() {
        out.push_str("\nFunding Impact Analysis\n");
        for note in notes {
            out.push_str(&format!("  * {}\n", note));
        }
    }

    out.push_str(&format!(
        "\nThis decision will influence your options in future stages [{}]\n",
        choice.impact.outcome()
    ));
    out
}

// =============================================================================
// FUNDING
// =============================================================================

/// Estimator inputs, total and breakdown.
pub fn funding_panel(estimate: &FundingEstimate) -> String {
    let inputs = estimate.inputs();
    let mut out = String::new();

    out.push_str("Interactive Funding Calculator\n");
    out.push_str(&format!("  Team Size:            {} people\n", inputs.team_size()));
    out.push_str(&format!(
        "  Timeline:             {} months\n",
        inputs.timeline_months()
    ));
    out.push_str(&format!(
        "  Average Salary:       {}/year\n",
        format_dollars(u64::from(inputs.avg_salary()))
    ));
    out.push_str(&format!(
        "  Product Complexity:   {}\n",
        inputs.complexity().label()
    ));
    out.push_str(&format!(
        "  Market Strategy:      {}\n",
        inputs.strategy().label()
    ));
    out.push_str(&format!(
        "  Customer Acquisition: {}\n",
        inputs.acquisition().label()
    ));

    out.push_str(&format!(
        "\n  Total Funding Required: {}\n\n",
        format_dollars(estimate.total())
    ));

    for item in estimate.breakdown() {
        out.push_str(&format!(
            "  {:<22} {:>14} {:>7}  {}\n",
            item.category.label(),
            item.amount.to_currency(),
            format_permille(estimate.share_permille(item.category)),
            item.category.color()
        ));
    }

    out.push_str("\n  Includes 15% operations overhead and 20% buffer for unexpected costs.\n");
    out.push_str("  Marketing and acquisition costs scale with timeline and strategy.\n");
    out
}

// =============================================================================
// NAVIGATION
// =============================================================================

/// Navigation hints for the current stage.
pub fn navigation(journey: &Journey) -> String {
    if journey.current_index().is_none() {
        return "Type `start` to begin your journey.\n".to_string();
    }

    let mut parts = Vec::new();
    if journey.can_retreat() {
        parts.push("`back`: Previous Stage");
    }
    if journey.is_finished() {
        parts.push("`next`: Complete Journey");
    } else if journey.can_advance() {
        parts.push("`next`: Next Stage");
    }

    let mut out = String::new();
    if !parts.is_empty() {
        out.push_str(&format!("{}\n", parts.join(" | ")));
    }
    if journey.is_finished() {
        out.push_str(CONGRATULATIONS);
        out.push('\n');
    } else if journey.can_advance() {
        out.push_str(
            "Ready to move forward! Your decisions from this stage will influence future \
             scenarios.\n",
        );
    } else {
        out.push_str("Complete all scenarios to continue.\n");
    }
    out
}

/// Every recorded decision, stage by stage.
pub fn journey_summary(journey: &Journey) -> String {
    let mut out = String::new();
    out.push_str("Your Decisions\n");
    for stage in journey.catalog().stages() {
        out.push_str(&format!("  {}\n", stage.title));
        for scenario in &stage.scenarios {
            match journey.selected_choice(scenario.key.as_str()) {
                Some(choice) => out.push_str(&format!(
                    "    {}: {} [{}]\n",
                    scenario.title,
                    choice.title,
                    choice.impact.outcome()
                )),
                None => out.push_str(&format!("    {}: (undecided)\n", scenario.title)),
            }
        }
    }
    out
}

/// Closing screen once the last stage is complete.
pub fn completion(journey: &Journey) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str("Journey Complete\n");
    out.push_str(CONGRATULATIONS);
    out.push_str("\n\n");
    out.push_str(&journey_summary(journey));
    if let Some(estimate) = journey.funding() {
        out.push_str(&format!(
            "\nFunding plan: {}\n",
            format_dollars(estimate.total())
        ));
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================
