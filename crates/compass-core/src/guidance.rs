//! # Funding Guidance
//!
//! Turns the current funding total into concrete notes for choices that
//! describe a way of raising money (bootstrapping, friends & family, angel).

use crate::estimator::format_dollars;
use serde::{Deserialize, Serialize};

/// Equity an angel typically takes, percent (midpoint of 15-25%).
pub const ANGEL_EQUITY_PERCENT: u64 = 20;

/// Lower bound of a friends & family raise, percent of the total.
pub const PARTIAL_RAISE_FLOOR_PERCENT: u64 = 50;

/// How a choice relates to covering the estimated funding need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FundingGuidance {
    /// The founder covers the whole need personally.
    SelfFunded,
    /// Part of the need is raised from a personal network.
    PartialRaise,
    /// A single backer covers the whole need in exchange for equity.
    FullCoverage,
}

impl FundingGuidance {
    /// Guidance notes for a funding total in whole dollars.
    ///
    /// Returns nothing for a zero total (no estimate yet).
    #[must_use]
    pub fn notes(&self, total: u64) -> Vec<String> {
        if total == 0 {
            return Vec::new();
        }
        let amount = format_dollars(total);
        match self {
            FundingGuidance::SelfFunded => vec![
                format!("You'll need to fund {} from personal savings", amount),
                "Consider reducing team size or extending timeline to lower costs".to_string(),
                "Revenue must cover operating expenses within your timeline".to_string(),
            ],
            FundingGuidance::PartialRaise => vec![
                format!(
                    "Target raise: {} - {}",
                    format_dollars(percent_rounded(total, PARTIAL_RAISE_FLOOR_PERCENT)),
                    amount
                ),
                "Typical individual investment: $5,000 - $25,000".to_string(),
                "You'll need 3-8 family/friend investors".to_string(),
            ],
            FundingGuidance::FullCoverage => vec![
                format!("Angel can typically cover your full {} need", amount),
                format!(
                    "Expect to give up 15-25% equity (~{} valuation)",
                    format_dollars(percent_rounded(total, ANGEL_EQUITY_PERCENT))
                ),
                "Angels often provide follow-on funding for growth".to_string(),
            ],
        }
    }
}

/// `percent`% of `value`, rounded half up.
fn percent_rounded(value: u64, percent: u64) -> u64 {
    value.saturating_mul(percent).saturating_add(50) / 100
}
