//! # Catalog
//!
//! Immutable reference data: ordered stages, their scenarios, and the
//! choices each scenario offers.
//!
//! A [`Catalog`] can only be obtained in a valid state, either from the
//! built-in founder journey or through [`Catalog::new`] (which is also what
//! deserialization goes through).
//!
//! ## Structural Rules
//!
//! - At least one stage; every stage has at least one scenario; every
//!   scenario has at least one choice
//! - Stage ids are unique; scenario keys are unique across the catalog;
//!   choice keys are unique within their scenario
//! - No identifier is empty

mod builtin;

use crate::guidance::FundingGuidance;
use crate::{ChoiceKey, CompassError, Impact, ScenarioKey, StageId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// REFERENCE DATA
// =============================================================================

/// One selectable option of a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub key: ChoiceKey,
    pub title: String,
    pub description: String,
    pub immediate_implication: String,
    pub long_term_implication: String,
    #[serde(default)]
    pub impact: Impact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance: Option<FundingGuidance>,
}

/// A single decision point within a stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub key: ScenarioKey,
    pub title: String,
    pub description: String,
    /// Whether the funding estimator is presented with this scenario.
    #[serde(default)]
    pub hosts_estimator: bool,
    pub choices: Vec<Choice>,
}

impl Scenario {
    /// Look up a choice by key.
    #[must_use]
    pub fn choice(&self, key: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.key.as_str() == key)
    }

    /// Check whether `key` is one of this scenario's choices.
    #[must_use]
    pub fn offers(&self, key: &str) -> bool {
        self.choice(key).is_some()
    }
}

/// A named phase of the journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: StageId,
    pub title: String,
    pub description: String,
    /// Short blurb for the welcome overview.
    #[serde(default)]
    pub overview: String,
    /// Focus tag for the welcome overview.
    #[serde(default)]
    pub focus: String,
    pub scenarios: Vec<Scenario>,
}

impl Stage {
    /// Look up a scenario of this stage by key.
    #[must_use]
    pub fn scenario(&self, key: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.key.as_str() == key)
    }
}

// =============================================================================
// CATALOG
// =============================================================================

/// Unvalidated catalog as it appears in files.
#[derive(Deserialize)]
struct CatalogDef {
    stages: Vec<Stage>,
}

impl TryFrom<CatalogDef> for Catalog {
    type Error = CompassError;

    fn try_from(def: CatalogDef) -> Result<Self, Self::Error> {
        Catalog::new(def.stages)
    }
}

/// The ordered, validated set of stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDef")]
pub struct Catalog {
    stages: Vec<Stage>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::founder_journey()
    }
}

impl Catalog {
    /// Build a catalog, enforcing the structural rules.
    pub fn new(stages: Vec<Stage>) -> Result<Self, CompassError> {
        validate(&stages)?;
        Ok(Self { stages })
    }

    /// The built-in three-stage founder journey.
    #[must_use]
    pub fn founder_journey() -> Self {
        Self {
            stages: builtin::stages(),
        }
    }

    /// All stages in order.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Stage at `index`, if any.
    #[must_use]
    pub fn stage(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index)
    }

    /// Number of stages (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always false; a valid catalog has at least one stage.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Find a scenario anywhere in the catalog, with its stage index.
    #[must_use]
    pub fn scenario(&self, key: &str) -> Option<(usize, &Scenario)> {
        self.stages
            .iter()
            .enumerate()
            .find_map(|(i, stage)| stage.scenario(key).map(|s| (i, s)))
    }

    /// Total number of scenarios across all stages.
    #[must_use]
    pub fn scenario_count(&self) -> usize {
        self.stages.iter().map(|s| s.scenarios.len()).sum()
    }
}

fn invalid(msg: impl Into<String>) -> CompassError {
    CompassError::InvalidCatalog(msg.into())
}

fn validate(stages: &[Stage]) -> Result<(), CompassError> {
    if stages.is_empty() {
        return Err(invalid("catalog has no stages"));
    }

    let mut stage_ids = BTreeSet::new();
    let mut scenario_keys = BTreeSet::new();

    for stage in stages {
        if stage.id.as_str().is_empty() {
            return Err(invalid("stage with empty id"));
        }
        if !stage_ids.insert(stage.id.as_str()) {
            return Err(invalid(format!("duplicate stage id '{}'", stage.id)));
        }
        if stage.scenarios.is_empty() {
            return Err(invalid(format!("stage '{}' has no scenarios", stage.id)));
        }

        for scenario in &stage.scenarios {
            if scenario.key.as_str().is_empty() {
                return Err(invalid(format!(
                    "stage '{}' has a scenario with empty key",
                    stage.id
                )));
            }
            if !scenario_keys.insert(scenario.key.as_str()) {
                return Err(invalid(format!("duplicate scenario key '{}'", scenario.key)));
            }
            if scenario.choices.is_empty() {
                return Err(invalid(format!(
                    "scenario '{}' has no choices",
                    scenario.key
                )));
            }

            let mut choice_keys = BTreeSet::new();
            for choice in &scenario.choices {
                if choice.key.as_str().is_empty() {
                    return Err(invalid(format!(
                        "scenario '{}' has a choice with empty key",
                        scenario.key
                    )));
                }
                if !choice_keys.insert(choice.key.as_str()) {
                    return Err(invalid(format!(
                        "duplicate choice key '{}' in scenario '{}'",
                        choice.key, scenario.key
                    )));
                }
            }
        }
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(key: &str) -> Choice {
        Choice {
            key: ChoiceKey::new(key),
            title: key.to_string(),
            description: String::new(),
            immediate_implication: String::new(),
            long_term_implication: String::new(),
            impact: Impact::Neutral,
            guidance: None,
        }
    }

    fn scenario(key: &str, choices: &[&str]) -> Scenario {
        Scenario {
            key: ScenarioKey::new(key),
            title: key.to_string(),
            description: String::new(),
            hosts_estimator: false,
            choices: choices.iter().map(|c| choice(c)).collect(),
        }
    }

    fn stage(id: &str, scenarios: Vec<Scenario>) -> Stage {
        Stage {
            id: StageId::new(id),
            title: id.to_string(),
            description: String::new(),
            overview: String::new(),
            focus: String::new(),
            scenarios,
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::founder_journey();
        assert!(validate(catalog.stages()).is_ok());
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.scenario_count(), 3);
    }

    #[test]
    fn builtin_estimator_lives_in_seed_stage() {
        let catalog = Catalog::founder_journey();
        let (index, scenario) = catalog.scenario("funding-source").expect("scenario");
        assert_eq!(index, 0);
        assert!(scenario.hosts_estimator);
        assert!(scenario.offers("angel-investor"));
        assert!(!scenario.offers("micro-vc"));
    }

    #[test]
    fn empty_catalog_rejected() {
        assert!(matches!(
            Catalog::new(Vec::new()),
            Err(CompassError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn stage_without_scenarios_rejected() {
        assert!(Catalog::new(vec![stage("a", Vec::new())]).is_err());
    }

    #[test]
    fn scenario_without_choices_rejected() {
        assert!(Catalog::new(vec![stage("a", vec![scenario("s", &[])])]).is_err());
    }

    #[test]
    fn duplicate_scenario_across_stages_rejected() {
        let result = Catalog::new(vec![
            stage("a", vec![scenario("s", &["x"])]),
            stage("b", vec![scenario("s", &["y"])]),
        ]);
        assert_eq!(
            result,
            Err(CompassError::InvalidCatalog(
                "duplicate scenario key 's'".to_string()
            ))
        );
    }

    #[test]
    fn duplicate_choice_within_scenario_rejected() {
        assert!(Catalog::new(vec![stage("a", vec![scenario("s", &["x", "x"])])]).is_err());
    }

    #[test]
    fn same_choice_key_in_different_scenarios_allowed() {
        let catalog = Catalog::new(vec![stage(
            "a",
            vec![scenario("s1", &["x"]), scenario("s2", &["x"])],
        )]);
        assert!(catalog.is_ok());
    }
}
