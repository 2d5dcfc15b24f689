//! # Core Type Definitions
//!
//! This module contains the shared vocabulary of the compass core:
//! - Reference data identifiers (`StageId`, `ScenarioKey`, `ChoiceKey`)
//! - The qualitative impact tag carried by every choice (`Impact`)
//! - Error types (`CompassError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Implement `Ord` for deterministic ordering in `BTreeMap`/`BTreeSet`
//! - Carry no floating-point state

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use thiserror::Error;

// =============================================================================
// REFERENCE DATA IDENTIFIERS
// =============================================================================

macro_rules! string_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new key from a string.
            #[must_use]
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the key as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_key!(
    /// Identifier of a stage in the journey (e.g. `seed`).
    StageId
);

string_key!(
    /// Identifier of a scenario. Unique across the whole catalog.
    ScenarioKey
);

string_key!(
    /// Identifier of a choice. Unique within its scenario.
    ChoiceKey
);

// =============================================================================
// IMPACT
// =============================================================================

/// Qualitative impact of a choice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Impact {
    /// Lowercase name, as used in catalog files.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Impact::Positive => "positive",
            Impact::Negative => "negative",
            Impact::Neutral => "neutral",
        }
    }

    /// Badge shown next to a choice before and after it is selected.
    #[must_use]
    pub fn badge(&self) -> &'static str {
        match self {
            Impact::Positive => "Recommended",
            Impact::Negative => "High Risk",
            Impact::Neutral => "Balanced",
        }
    }

    /// Outcome label shown under a choice result.
    #[must_use]
    pub fn outcome(&self) -> &'static str {
        match self {
            Impact::Positive => "Strategic Advantage",
            Impact::Negative => "Potential Challenge",
            Impact::Neutral => "Neutral Impact",
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the compass core.
///
/// Refused journey transitions are NOT errors; see
/// [`Transition`](crate::journey::Transition).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompassError {
    /// A numeric estimator input is outside its allowed bounds.
    #[error("{field} must be between {min} and {max}, got {value}")]
    InputOutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// A numeric estimator input is not on its step grid.
    #[error("{field} must be a multiple of {step}, got {value}")]
    InputOffStep {
        field: &'static str,
        value: u32,
        step: u32,
    },

    /// An enumerated input was given a name it does not know.
    #[error("unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Catalog reference data violates a structural rule.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

// =============================================================================
// TESTS
// =============================================================================
