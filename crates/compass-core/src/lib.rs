//! # compass-core
//!
//! The founder journey engine - THE LOGIC.
//!
//! This crate holds everything the compass needs to walk a user through a
//! linear sequence of staged decision scenarios and to estimate the funding
//! a venture needs:
//! - `catalog`: immutable stages, scenarios and choices
//! - `journey`: the progression state machine over one session
//! - `estimator`: the fixed funding formula and its breakdown
//! - `guidance`: funding notes attached to financing choices
//! - `system`: read-only progress summaries
//!
//! ## Architectural Constraints
//!
//! - Pure Rust: no async, no I/O, no logging dependency
//! - Deterministic: `BTreeMap` only, integer arithmetic only
//! - Refused transitions are outcomes, not errors

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod estimator;
pub mod guidance;
pub mod journey;
pub mod primitives;
pub mod system;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{ChoiceKey, CompassError, Impact, ScenarioKey, StageId};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use catalog::{Catalog, Choice, Scenario, Stage};
pub use estimator::{
    AcquisitionMode, BreakdownItem, Category, Complexity, FundingEstimate, FundingInputs,
    MarketStrategy, Money, estimate, format_dollars, format_permille,
};
pub use guidance::FundingGuidance;
pub use journey::{Journey, Position, Progress, Refusal, Transition};

// =============================================================================
// RE-EXPORTS: System
// =============================================================================

pub use system::{JourneyProgress, StageStatus, StageSummary};
