//! # Stage Progress
//!
//! Read-only summaries of where a journey stands, for the progress strip
//! and for machine-readable output.
//!
//! ## Stage Status
//!
//! | Relation to current stage | Status |
//! |---------------------------|--------|
//! | before | Completed |
//! | current, every scenario decided | Completed |
//! | current, undecided scenarios | Current |
//! | after (or journey not started) | Upcoming |

use crate::journey::Journey;
use serde::{Deserialize, Serialize};

// =============================================================================
// STAGE STATUS
// =============================================================================

/// Display status of a stage in the progress strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Completed,
    Current,
    Upcoming,
}

impl StageStatus {
    /// Badge text.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            StageStatus::Completed => "Complete",
            StageStatus::Current => "In Progress",
            StageStatus::Upcoming => "Upcoming",
        }
    }
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// JOURNEY PROGRESS
// =============================================================================

/// One entry of the progress strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageSummary {
    pub id: String,
    pub title: String,
    pub status: StageStatus,
}

/// Snapshot of a journey's progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyProgress {
    /// Zero-based index of the current stage, `None` before start.
    pub current: Option<usize>,
    pub total_stages: usize,
    /// Stages whose every scenario is decided.
    pub completed_stages: usize,
    pub decisions_made: usize,
    pub total_scenarios: usize,
    /// Decided scenarios as a percentage of all scenarios (integer, 0-100).
    pub percent: u8,
    pub finished: bool,
    pub stages: Vec<StageSummary>,
}

impl JourneyProgress {
    /// Take a snapshot of `journey`.
    #[must_use]
    pub fn from_journey(journey: &Journey) -> Self {
        let catalog = journey.catalog();
        let total_scenarios = catalog.scenario_count();
        let decisions_made = journey.decisions_made();

        let stages: Vec<StageSummary> = catalog
            .stages()
            .iter()
            .enumerate()
            .map(|(i, stage)| StageSummary {
                id: stage.id.to_string(),
                title: stage.title.clone(),
                status: journey.stage_status(i),
            })
            .collect();

        let completed_stages = (0..catalog.len())
            .filter(|&i| journey.is_stage_complete(i))
            .count();

        let percent = if total_scenarios > 0 {
            ((decisions_made as u64).saturating_mul(100) / (total_scenarios as u64)).min(100) as u8
        } else {
            100
        };

        Self {
            current: journey.current_index(),
            total_stages: catalog.len(),
            completed_stages,
            decisions_made,
            total_scenarios,
            percent,
            finished: journey.is_finished(),
            stages,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
