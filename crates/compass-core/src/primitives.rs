//! # Estimator Primitives
//!
//! Fixed constants of the funding estimator.
//!
//! These are compiled into the binary and are immutable at runtime.
//! Catalog content may be replaced; the estimator formula may not.
//!
//! ## Fixed-Point Money
//!
//! Amounts are integers in ten-thousandths of a dollar ([`MONEY_SCALE`]).
//! With the timeline on a 3-month grid, every prorated cost and both
//! percentage overheads land exactly on this grid, so no rounding happens
//! until the final total.

/// Integer money units per dollar.
pub const MONEY_SCALE: u64 = 10_000;

/// Months in a year; annual costs are prorated over the timeline by this.
pub const MONTHS_PER_YEAR: u64 = 12;

// =============================================================================
// INPUT BOUNDS
// =============================================================================

/// Smallest allowed team size.
pub const TEAM_SIZE_MIN: u32 = 1;

/// Largest allowed team size.
pub const TEAM_SIZE_MAX: u32 = 15;

/// Shortest allowed timeline in months.
pub const TIMELINE_MIN: u32 = 6;

/// Longest allowed timeline in months.
pub const TIMELINE_MAX: u32 = 24;

/// Timeline granularity in months.
pub const TIMELINE_STEP: u32 = 3;

/// Lowest allowed average annual salary in dollars.
pub const SALARY_MIN: u32 = 40_000;

/// Highest allowed average annual salary in dollars.
pub const SALARY_MAX: u32 = 150_000;

// =============================================================================
// DEFAULT INPUTS
// =============================================================================

pub const DEFAULT_TEAM_SIZE: u32 = 3;
pub const DEFAULT_TIMELINE: u32 = 12;
pub const DEFAULT_SALARY: u32 = 85_000;

// =============================================================================
// COST MODEL
// =============================================================================

/// Product development base cost in dollars, scaled by complexity.
pub const DEV_BASE_COST: u64 = 50_000;

/// Operations overhead, percent of direct costs.
pub const OPERATIONS_PERCENT: u64 = 15;

/// Contingency buffer, percent of direct costs plus operations.
pub const BUFFER_PERCENT: u64 = 20;
