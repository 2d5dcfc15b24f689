//! # Journey Module
//!
//! The progression state machine: a [`Catalog`] plus the mutable
//! [`Progress`] of one session.
//!
//! ```text
//! NotStarted --start--> OnStage(0) --advance--> OnStage(1) ... OnStage(n-1)
//!                          ^                        |
//!                          +--------retreat---------+
//! ```
//!
//! There is no terminal state: once the last stage is complete the journey
//! is finished and `advance` is refused.
//!
//! Disallowed transitions are not errors. Every operation returns a
//! [`Transition`]; a refused transition leaves the session untouched.

use crate::catalog::{Catalog, Choice, Stage};
use crate::estimator::{FundingEstimate, FundingInputs, estimate};
use crate::system::StageStatus;
use crate::{ChoiceKey, ScenarioKey};
use std::collections::BTreeMap;

// =============================================================================
// TRANSITION OUTCOMES
// =============================================================================

/// Where the user currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// Welcome screen; no stage entered yet.
    #[default]
    NotStarted,
    /// On the stage with this index.
    OnStage(usize),
}

/// Why a transition was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refusal {
    /// The operation needs a started journey.
    NotStarted,
    /// `start` was called on a started journey.
    AlreadyStarted,
    /// The scenario key is not in the catalog.
    UnknownScenario(ScenarioKey),
    /// The choice key is not offered by the scenario.
    UnknownChoice {
        scenario: ScenarioKey,
        choice: ChoiceKey,
    },
    /// The current stage still has scenarios without a choice.
    StageIncomplete {
        stage: usize,
        missing: Vec<ScenarioKey>,
    },
    /// There is no stage after the current one.
    LastStage,
    /// There is no stage before the current one.
    FirstStage,
}

impl std::fmt::Display for Refusal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotStarted => write!(f, "the journey has not started yet"),
            Self::AlreadyStarted => write!(f, "the journey has already started"),
            Self::UnknownScenario(key) => write!(f, "there is no scenario '{key}'"),
            Self::UnknownChoice { scenario, choice } => {
                write!(f, "'{choice}' is not a choice of scenario '{scenario}'")
            }
            Self::StageIncomplete { missing, .. } => {
                let keys: Vec<&str> = missing.iter().map(ScenarioKey::as_str).collect();
                write!(
                    f,
                    "complete all scenarios to continue (missing: {})",
                    keys.join(", ")
                )
            }
            Self::LastStage => write!(f, "already on the last stage"),
            Self::FirstStage => write!(f, "already on the first stage"),
        }
    }
}

/// Outcome of a journey operation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Transition {
    Applied,
    Refused(Refusal),
}

impl Transition {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }

    /// The refusal reason, if the transition was refused.
    #[must_use]
    pub fn refusal(&self) -> Option<&Refusal> {
        match self {
            Transition::Applied => None,
            Transition::Refused(reason) => Some(reason),
        }
    }
}

// =============================================================================
// PROGRESS
// =============================================================================

/// Mutable session state.
///
/// Invariant: a scenario key is in `choices` only after one of its listed
/// choice keys was recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    position: Position,
    choices: BTreeMap<ScenarioKey, ChoiceKey>,
    results_shown: BTreeMap<ScenarioKey, bool>,
    funding: Option<FundingEstimate>,
}

impl Progress {
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// All recorded choices, ordered by scenario key.
    #[must_use]
    pub fn choices(&self) -> &BTreeMap<ScenarioKey, ChoiceKey> {
        &self.choices
    }

    /// The choice recorded for a scenario.
    #[must_use]
    pub fn chosen(&self, scenario: &str) -> Option<&ChoiceKey> {
        self.choices.get(scenario)
    }

    /// Whether the result panel of a scenario is visible.
    #[must_use]
    pub fn is_result_shown(&self, scenario: &str) -> bool {
        self.results_shown.get(scenario).copied().unwrap_or(false)
    }

    /// The last computed funding estimate.
    #[must_use]
    pub fn funding(&self) -> Option<&FundingEstimate> {
        self.funding.as_ref()
    }
}

// =============================================================================
// JOURNEY
// =============================================================================

/// A catalog together with the progress of one session.
#[derive(Debug, Clone, Default)]
pub struct Journey {
    catalog: Catalog,
    progress: Progress,
}

impl Journey {
    /// Create a journey over `catalog`, not yet started.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            progress: Progress::default(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.progress.position
    }

    /// Index of the current stage, `None` before start.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.progress.position {
            Position::NotStarted => None,
            Position::OnStage(i) => Some(i),
        }
    }

    /// The current stage, `None` before start.
    #[must_use]
    pub fn current_stage(&self) -> Option<&Stage> {
        self.current_index().and_then(|i| self.catalog.stage(i))
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    /// NotStarted → OnStage(0).
    pub fn start(&mut self) -> Transition {
        match self.progress.position {
            Position::NotStarted => {
                self.progress.position = Position::OnStage(0);
                Transition::Applied
            }
            Position::OnStage(_) => Transition::Refused(Refusal::AlreadyStarted),
        }
    }

    /// Record (or overwrite) the choice for a scenario and show its result.
    pub fn record_choice(&mut self, scenario: &str, choice: &str) -> Transition {
        if self.progress.position == Position::NotStarted {
            return Transition::Refused(Refusal::NotStarted);
        }
        let Some((_, found)) = self.catalog.scenario(scenario) else {
            return Transition::Refused(Refusal::UnknownScenario(ScenarioKey::new(scenario)));
        };
        let Some(picked) = found.choice(choice) else {
            return Transition::Refused(Refusal::UnknownChoice {
                scenario: found.key.clone(),
                choice: ChoiceKey::new(choice),
            });
        };

        self.progress
            .choices
            .insert(found.key.clone(), picked.key.clone());
        self.progress.results_shown.insert(found.key.clone(), true);
        Transition::Applied
    }

    /// OnStage(i) → OnStage(i+1), only when stage i is complete.
    pub fn advance(&mut self) -> Transition {
        let Some(index) = self.current_index() else {
            return Transition::Refused(Refusal::NotStarted);
        };
        let missing = self.missing_scenarios(index);
        if !missing.is_empty() {
            return Transition::Refused(Refusal::StageIncomplete {
                stage: index,
                missing,
            });
        }
        if index.saturating_add(1) >= self.catalog.len() {
            return Transition::Refused(Refusal::LastStage);
        }
        self.progress.position = Position::OnStage(index.saturating_add(1));
        Transition::Applied
    }

    /// OnStage(i) → OnStage(i-1) for i > 0.
    pub fn retreat(&mut self) -> Transition {
        match self.progress.position {
            Position::NotStarted => Transition::Refused(Refusal::NotStarted),
            Position::OnStage(0) => Transition::Refused(Refusal::FirstStage),
            Position::OnStage(i) => {
                self.progress.position = Position::OnStage(i.saturating_sub(1));
                Transition::Applied
            }
        }
    }

    /// Back to the welcome screen with everything cleared.
    pub fn reset(&mut self) {
        self.progress = Progress::default();
    }

    /// Recompute the funding estimate and remember it.
    pub fn update_funding(&mut self, inputs: &FundingInputs) -> &FundingEstimate {
        self.progress.funding.insert(estimate(inputs))
    }

    /// The last computed funding estimate.
    #[must_use]
    pub fn funding(&self) -> Option<&FundingEstimate> {
        self.progress.funding()
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Scenarios of a stage that have no valid recorded choice.
    ///
    /// Empty for an index past the end of the catalog.
    #[must_use]
    pub fn missing_scenarios(&self, index: usize) -> Vec<ScenarioKey> {
        let Some(stage) = self.catalog.stage(index) else {
            return Vec::new();
        };
        stage
            .scenarios
            .iter()
            .filter(|scenario| {
                !self
                    .progress
                    .chosen(scenario.key.as_str())
                    .is_some_and(|choice| scenario.offers(choice.as_str()))
            })
            .map(|scenario| scenario.key.clone())
            .collect()
    }

    /// A stage is complete iff every one of its scenarios has a recorded
    /// choice listed by that scenario.
    #[must_use]
    pub fn is_stage_complete(&self, index: usize) -> bool {
        index < self.catalog.len() && self.missing_scenarios(index).is_empty()
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.current_index().is_some_and(|i| {
            self.is_stage_complete(i) && i.saturating_add(1) < self.catalog.len()
        })
    }

    #[must_use]
    pub fn can_retreat(&self) -> bool {
        self.current_index().is_some_and(|i| i > 0)
    }

    #[must_use]
    pub fn is_last_stage(&self) -> bool {
        self.current_index()
            .is_some_and(|i| i.saturating_add(1) == self.catalog.len())
    }

    /// On the last stage with every scenario decided.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current_index()
            .is_some_and(|i| self.is_last_stage() && self.is_stage_complete(i))
    }

    /// Status of a stage for the progress strip.
    #[must_use]
    pub fn stage_status(&self, index: usize) -> StageStatus {
        match self.current_index() {
            None => StageStatus::Upcoming,
            Some(current) if index < current => StageStatus::Completed,
            Some(current) if index == current => {
                if self.is_stage_complete(index) {
                    StageStatus::Completed
                } else {
                    StageStatus::Current
                }
            }
            Some(_) => StageStatus::Upcoming,
        }
    }

    /// Number of scenarios with a recorded choice.
    #[must_use]
    pub fn decisions_made(&self) -> usize {
        self.progress.choices.len()
    }

    /// The full choice recorded for a scenario.
    #[must_use]
    pub fn selected_choice(&self, scenario: &str) -> Option<&Choice> {
        let chosen = self.progress.chosen(scenario)?;
        let (_, found) = self.catalog.scenario(scenario)?;
        found.choice(chosen.as_str())
    }

    /// Funding guidance notes for the choice recorded on a scenario.
    ///
    /// Empty when no choice, no guidance tag, or no estimate exists.
    #[must_use]
    pub fn guidance_notes(&self, scenario: &str) -> Vec<String> {
        let total = self.funding().map_or(0, FundingEstimate::total);
        self.selected_choice(scenario)
            .and_then(|choice| choice.guidance)
            .map(|guidance| guidance.notes(total))
            .unwrap_or_default()
    }
}

// =============================================================================
// TESTS
// =============================================================================
