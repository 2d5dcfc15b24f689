//! # Property-Based Tests
//!
//! Estimator arithmetic and journey guard invariants, checked with proptest.

use compass_core::{
    AcquisitionMode, Complexity, FundingInputs, Journey, MarketStrategy, Money, Position,
    Transition, estimate,
};
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

fn complexity() -> impl Strategy<Value = Complexity> {
    prop::sample::select(Complexity::ALL.to_vec())
}

fn strategy() -> impl Strategy<Value = MarketStrategy> {
    prop::sample::select(MarketStrategy::ALL.to_vec())
}

fn acquisition() -> impl Strategy<Value = AcquisitionMode> {
    prop::sample::select(AcquisitionMode::ALL.to_vec())
}

fn inputs() -> impl Strategy<Value = FundingInputs> {
    (
        1u32..=15,
        2u32..=8,
        40_000u32..=150_000,
        complexity(),
        strategy(),
        acquisition(),
    )
        .prop_map(|(team, quarters, salary, c, s, a)| {
            FundingInputs::new(team, quarters * 3, salary, c, s, a).expect("valid inputs")
        })
}

/// Built-in catalog keys: (scenario, choices).
const SCENARIOS: [(&str, [&str; 3]); 3] = [
    (
        "funding-source",
        ["bootstrap", "friends-family", "angel-investor"],
    ),
    (
        "investor-type",
        ["traditional-vc", "strategic-investor", "micro-vc"],
    ),
    (
        "business-model",
        ["subscription-focus", "transaction-focus", "hybrid-model"],
    ),
];

// =============================================================================
// ESTIMATOR PROPERTIES
// =============================================================================

proptest! {
    /// The total is the rounded sum of the six breakdown amounts.
    #[test]
    fn total_is_rounded_breakdown_sum(inputs in inputs()) {
        let result = estimate(&inputs);
        let sum: Money = result.breakdown().iter().map(|item| item.amount).sum();

        prop_assert_eq!(result.breakdown().len(), 6);
        prop_assert_eq!(result.total(), sum.round_dollars());
    }

    /// The operations and buffer overheads are exact percentages.
    #[test]
    fn overheads_are_exact(inputs in inputs()) {
        let result = estimate(&inputs);
        let units: Vec<u64> = result.breakdown().iter().map(|i| i.amount.units()).collect();
        let direct = units[0] + units[1] + units[2] + units[3];

        prop_assert_eq!(units[4] * 100, direct * 15);
        prop_assert_eq!(units[5] * 100, (direct + units[4]) * 20);
    }

    /// Same inputs, same estimate.
    #[test]
    fn estimate_is_deterministic(inputs in inputs()) {
        prop_assert_eq!(estimate(&inputs), estimate(&inputs));
    }

    #[test]
    fn total_monotonic_in_team_size(inputs in inputs()) {
        let mut bigger = inputs;
        if bigger.set_team_size(inputs.team_size() + 1).is_ok() {
            prop_assert!(estimate(&bigger).total() >= estimate(&inputs).total());
        }
    }

    #[test]
    fn total_monotonic_in_timeline(inputs in inputs()) {
        let mut longer = inputs;
        if longer.set_timeline_months(inputs.timeline_months() + 3).is_ok() {
            prop_assert!(estimate(&longer).total() >= estimate(&inputs).total());
        }
    }

    #[test]
    fn total_monotonic_in_salary(inputs in inputs(), raise in 1u32..20_000) {
        let mut richer = inputs;
        if richer.set_avg_salary(inputs.avg_salary() + raise).is_ok() {
            prop_assert!(estimate(&richer).total() >= estimate(&inputs).total());
        }
    }

    /// Selecting a larger category never lowers the total.
    #[test]
    fn total_monotonic_in_categories(inputs in inputs()) {
        for pair in Complexity::ALL.windows(2) {
            let (mut low, mut high) = (inputs, inputs);
            low.set_complexity(pair[0]);
            high.set_complexity(pair[1]);
            prop_assert!(estimate(&high).total() >= estimate(&low).total());
        }
        for pair in MarketStrategy::ALL.windows(2) {
            let (mut low, mut high) = (inputs, inputs);
            low.set_strategy(pair[0]);
            high.set_strategy(pair[1]);
            prop_assert!(estimate(&high).total() >= estimate(&low).total());
        }
        for pair in AcquisitionMode::ALL.windows(2) {
            let (mut low, mut high) = (inputs, inputs);
            low.set_acquisition(pair[0]);
            high.set_acquisition(pair[1]);
            prop_assert!(estimate(&high).total() >= estimate(&low).total());
        }
    }
}

#[test]
fn complexity_factor_doubles_at_each_step() {
    for pair in Complexity::ALL.windows(2) {
        assert_eq!(pair[1].factor_halves(), 2 * pair[0].factor_halves());
        assert_eq!(pair[1].dev_cost().units(), 2 * pair[0].dev_cost().units());
    }
}

// =============================================================================
// JOURNEY PROPERTIES
// =============================================================================

proptest! {
    /// A stage is complete iff every one of its scenarios has a choice.
    #[test]
    fn completeness_iff_all_scenarios_chosen(picks in vec(proptest::option::of(0usize..3), 3)) {
        let mut journey = Journey::default();
        let _ = journey.start();

        for (i, pick) in picks.iter().enumerate() {
            if let Some(choice) = pick {
                let (scenario, choices) = SCENARIOS[i];
                prop_assert!(journey.record_choice(scenario, choices[*choice]).is_applied());
            }
        }

        for (i, pick) in picks.iter().enumerate() {
            prop_assert_eq!(journey.is_stage_complete(i), pick.is_some());
        }
    }

    /// Random command sequences never break the navigation guards.
    #[test]
    fn navigation_guards_hold(ops in vec((0u8..5, 0usize..3, 0usize..4), 0..60)) {
        let mut journey = Journey::default();

        for (op, scenario, choice) in ops {
            let before = journey.position();
            let complete_before = journey.current_index().is_some_and(|i| journey.is_stage_complete(i));

            match op {
                0 => {
                    let outcome = journey.start();
                    prop_assert_eq!(outcome.is_applied(), before == Position::NotStarted);
                }
                1 => {
                    let outcome = journey.advance();
                    if outcome.is_applied() {
                        prop_assert!(complete_before);
                        if let Position::OnStage(i) = before {
                            prop_assert_eq!(journey.position(), Position::OnStage(i + 1));
                        }
                    } else {
                        prop_assert_eq!(journey.position(), before);
                    }
                }
                2 => {
                    let outcome = journey.retreat();
                    match before {
                        Position::NotStarted | Position::OnStage(0) => {
                            prop_assert!(matches!(outcome, Transition::Refused(_)));
                            prop_assert_eq!(journey.position(), before);
                        }
                        Position::OnStage(i) => {
                            prop_assert!(outcome.is_applied());
                            prop_assert_eq!(journey.position(), Position::OnStage(i - 1));
                        }
                    }
                }
                _ => {
                    let (key, choices) = SCENARIOS[scenario];
                    // Index 3 is out of range and stands for an unlisted key.
                    let choice_key = choices.get(choice).copied().unwrap_or("not-a-choice");
                    let outcome = journey.record_choice(key, choice_key);
                    let expected = before != Position::NotStarted && choice < 3;
                    prop_assert_eq!(outcome.is_applied(), expected);
                    prop_assert_eq!(journey.position(), before);
                }
            }

            // Every recorded choice is one its scenario lists.
            for (scenario, choice) in journey.progress().choices() {
                let (_, found) = journey.catalog().scenario(scenario.as_str()).expect("known");
                prop_assert!(found.offers(choice.as_str()));
            }
        }
    }
}
