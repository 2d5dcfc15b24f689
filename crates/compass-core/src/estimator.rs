//! # Funding Estimator
//!
//! Pure function from six bounded inputs to a funding total and a
//! six-item category breakdown.
//!
//! ```text
//! team        = team_size * avg_salary * (timeline / 12)
//! development = 50_000 * complexity factor          (0.5 | 1 | 2)
//! marketing   = strategy base * (timeline / 12)     (15k | 50k | 150k)
//! acquisition = acquisition base * (timeline / 12)  (10k | 35k | 75k)
//! operations  = 15% of the four direct costs
//! buffer      = 20% of the direct costs plus operations
//! total       = round(sum of all six)
//! ```
//!
//! All arithmetic is integer fixed-point (see [`crate::primitives`]).

use crate::CompassError;
use crate::primitives::{
    BUFFER_PERCENT, DEFAULT_SALARY, DEFAULT_TEAM_SIZE, DEFAULT_TIMELINE, DEV_BASE_COST,
    MONEY_SCALE, MONTHS_PER_YEAR, OPERATIONS_PERCENT, SALARY_MAX, SALARY_MIN, TEAM_SIZE_MAX,
    TEAM_SIZE_MIN, TIMELINE_MAX, TIMELINE_MIN, TIMELINE_STEP,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// MONEY
// =============================================================================

/// An exact amount of money in ten-thousandths of a dollar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Create an amount from raw money units.
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    /// Create an amount from whole dollars.
    #[must_use]
    pub const fn from_dollars(dollars: u64) -> Self {
        Self(dollars.saturating_mul(MONEY_SCALE))
    }

    /// Raw money units.
    #[must_use]
    pub const fn units(self) -> u64 {
        self.0
    }

    /// Round to the nearest whole dollar, halves up.
    #[must_use]
    pub const fn round_dollars(self) -> u64 {
        self.0.saturating_add(MONEY_SCALE / 2) / MONEY_SCALE
    }

    #[must_use]
    pub const fn saturating_add(self, other: Money) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Take `percent`% of this amount (truncating below one unit).
    #[must_use]
    pub const fn percent(self, percent: u64) -> Self {
        Self(self.0.saturating_mul(percent) / 100)
    }

    /// Share of `total` in tenths of a percent, rounded half up.
    /// Zero when `total` is zero.
    #[must_use]
    pub fn share_permille(self, total: Money) -> u64 {
        if total.0 == 0 {
            return 0;
        }
        self.0
            .saturating_mul(1000)
            .saturating_add(total.0 / 2)
            / total.0
    }

    /// Currency form with thousands separators and cents when non-zero,
    /// e.g. `$30,000.75`.
    #[must_use]
    pub fn to_currency(self) -> String {
        let cents = self.0.saturating_add(50) / 100;
        let (dollars, rest) = (cents / 100, cents % 100);
        if rest == 0 {
            format_dollars(dollars)
        } else {
            format!("{}.{:02}", format_dollars(dollars), rest)
        }
    }
}

/// Exact decimal form without trailing zeros, e.g. `49500` or `30000.75`.
impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.0 / MONEY_SCALE;
        let frac = self.0 % MONEY_SCALE;
        if frac == 0 {
            return write!(f, "{}", whole);
        }
        let digits = format!("{:04}", frac);
        write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

/// Format whole dollars as `$455,400`.
#[must_use]
pub fn format_dollars(dollars: u64) -> String {
    let digits = dollars.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format tenths of a percent as `56.0%`.
#[must_use]
pub fn format_permille(permille: u64) -> String {
    format!("{}.{}%", permille / 10, permille % 10)
}

/// Prorate an annual dollar cost over `months`.
///
/// Exact for timelines on the 3-month grid.
fn prorate(annual_dollars: u64, months: u32) -> Money {
    Money::from_units(
        annual_dollars
            .saturating_mul(MONEY_SCALE)
            .saturating_mul(u64::from(months))
            / MONTHS_PER_YEAR,
    )
}

// =============================================================================
// ENUMERATED INPUTS
// =============================================================================

/// Product complexity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    #[default]
    Medium,
    Complex,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [Complexity::Simple, Complexity::Medium, Complexity::Complex];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Simple => "Simple (MVP with core features)",
            Complexity::Medium => "Medium (Full-featured product)",
            Complexity::Complex => "Complex (Enterprise/AI/Hardware)",
        }
    }

    /// Development cost multiplier in halves: 0.5, 1 and 2 become 1, 2 and 4.
    #[must_use]
    pub fn factor_halves(&self) -> u64 {
        match self {
            Complexity::Simple => 1,
            Complexity::Medium => 2,
            Complexity::Complex => 4,
        }
    }

    /// One-off product development cost.
    #[must_use]
    pub fn dev_cost(&self) -> Money {
        Money::from_dollars(DEV_BASE_COST.saturating_mul(self.factor_halves()) / 2)
    }
}

impl FromStr for Complexity {
    type Err = CompassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(Complexity::Simple),
            "medium" => Ok(Complexity::Medium),
            "complex" => Ok(Complexity::Complex),
            _ => Err(CompassError::UnknownVariant {
                kind: "complexity",
                value: s.to_string(),
                expected: "simple, medium, complex",
            }),
        }
    }
}

/// Market strategy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum MarketStrategy {
    #[default]
    Local,
    National,
    Global,
}

impl MarketStrategy {
    pub const ALL: [MarketStrategy; 3] = [
        MarketStrategy::Local,
        MarketStrategy::National,
        MarketStrategy::Global,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            MarketStrategy::Local => "local",
            MarketStrategy::National => "national",
            MarketStrategy::Global => "global",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            MarketStrategy::Local => "Local/Regional Launch",
            MarketStrategy::National => "National Market",
            MarketStrategy::Global => "Global Expansion",
        }
    }

    /// Annual marketing spend in dollars.
    #[must_use]
    pub fn annual_cost(&self) -> u64 {
        match self {
            MarketStrategy::Local => 15_000,
            MarketStrategy::National => 50_000,
            MarketStrategy::Global => 150_000,
        }
    }
}

impl FromStr for MarketStrategy {
    type Err = CompassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(MarketStrategy::Local),
            "national" => Ok(MarketStrategy::National),
            "global" => Ok(MarketStrategy::Global),
            _ => Err(CompassError::UnknownVariant {
                kind: "market strategy",
                value: s.to_string(),
                expected: "local, national, global",
            }),
        }
    }
}

/// Customer acquisition mode.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum AcquisitionMode {
    #[default]
    Organic,
    Paid,
    Aggressive,
}

impl AcquisitionMode {
    pub const ALL: [AcquisitionMode; 3] = [
        AcquisitionMode::Organic,
        AcquisitionMode::Paid,
        AcquisitionMode::Aggressive,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            AcquisitionMode::Organic => "organic",
            AcquisitionMode::Paid => "paid",
            AcquisitionMode::Aggressive => "aggressive",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            AcquisitionMode::Organic => "Organic Growth",
            AcquisitionMode::Paid => "Paid Marketing",
            AcquisitionMode::Aggressive => "Aggressive Acquisition",
        }
    }

    /// Annual customer acquisition spend in dollars.
    #[must_use]
    pub fn annual_cost(&self) -> u64 {
        match self {
            AcquisitionMode::Organic => 10_000,
            AcquisitionMode::Paid => 35_000,
            AcquisitionMode::Aggressive => 75_000,
        }
    }
}

impl FromStr for AcquisitionMode {
    type Err = CompassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "organic" => Ok(AcquisitionMode::Organic),
            "paid" => Ok(AcquisitionMode::Paid),
            "aggressive" => Ok(AcquisitionMode::Aggressive),
            _ => Err(CompassError::UnknownVariant {
                kind: "acquisition mode",
                value: s.to_string(),
                expected: "organic, paid, aggressive",
            }),
        }
    }
}

// =============================================================================
// INPUTS
// =============================================================================

/// Validated estimator inputs.
///
/// Fields are private so that every value in circulation is within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FundingInputs {
    team_size: u32,
    timeline_months: u32,
    avg_salary: u32,
    complexity: Complexity,
    strategy: MarketStrategy,
    acquisition: AcquisitionMode,
}

impl Default for FundingInputs {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE,
            timeline_months: DEFAULT_TIMELINE,
            avg_salary: DEFAULT_SALARY,
            complexity: Complexity::default(),
            strategy: MarketStrategy::default(),
            acquisition: AcquisitionMode::default(),
        }
    }
}

impl FundingInputs {
    /// Build inputs, rejecting out-of-range or off-grid numbers.
    pub fn new(
        team_size: u32,
        timeline_months: u32,
        avg_salary: u32,
        complexity: Complexity,
        strategy: MarketStrategy,
        acquisition: AcquisitionMode,
    ) -> Result<Self, CompassError> {
        Ok(Self {
            team_size: check_team_size(team_size)?,
            timeline_months: check_timeline(timeline_months)?,
            avg_salary: check_salary(avg_salary)?,
            complexity,
            strategy,
            acquisition,
        })
    }

    #[must_use]
    pub fn team_size(&self) -> u32 {
        self.team_size
    }

    #[must_use]
    pub fn timeline_months(&self) -> u32 {
        self.timeline_months
    }

    #[must_use]
    pub fn avg_salary(&self) -> u32 {
        self.avg_salary
    }

    #[must_use]
    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    #[must_use]
    pub fn strategy(&self) -> MarketStrategy {
        self.strategy
    }

    #[must_use]
    pub fn acquisition(&self) -> AcquisitionMode {
        self.acquisition
    }

    /// Change the team size. On error the inputs are left unchanged.
    pub fn set_team_size(&mut self, team_size: u32) -> Result<(), CompassError> {
        self.team_size = check_team_size(team_size)?;
        Ok(())
    }

    /// Change the timeline. On error the inputs are left unchanged.
    pub fn set_timeline_months(&mut self, months: u32) -> Result<(), CompassError> {
        self.timeline_months = check_timeline(months)?;
        Ok(())
    }

    /// Change the average salary. On error the inputs are left unchanged.
    pub fn set_avg_salary(&mut self, salary: u32) -> Result<(), CompassError> {
        self.avg_salary = check_salary(salary)?;
        Ok(())
    }

    pub fn set_complexity(&mut self, complexity: Complexity) {
        self.complexity = complexity;
    }

    pub fn set_strategy(&mut self, strategy: MarketStrategy) {
        self.strategy = strategy;
    }

    pub fn set_acquisition(&mut self, acquisition: AcquisitionMode) {
        self.acquisition = acquisition;
    }
}

fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<u32, CompassError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(CompassError::InputOutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn check_team_size(value: u32) -> Result<u32, CompassError> {
    check_range("team size", value, TEAM_SIZE_MIN, TEAM_SIZE_MAX)
}

fn check_timeline(value: u32) -> Result<u32, CompassError> {
    let value = check_range("timeline", value, TIMELINE_MIN, TIMELINE_MAX)?;
    if value % TIMELINE_STEP != 0 {
        return Err(CompassError::InputOffStep {
            field: "timeline",
            value,
            step: TIMELINE_STEP,
        });
    }
    Ok(value)
}

fn check_salary(value: u32) -> Result<u32, CompassError> {
    check_range("average salary", value, SALARY_MIN, SALARY_MAX)
}

// =============================================================================
// BREAKDOWN
// =============================================================================

/// Cost category of the breakdown, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    TeamSalaries,
    ProductDevelopment,
    Marketing,
    CustomerAcquisition,
    Operations,
    Buffer,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::TeamSalaries,
        Category::ProductDevelopment,
        Category::Marketing,
        Category::CustomerAcquisition,
        Category::Operations,
        Category::Buffer,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Category::TeamSalaries => "Team Salaries",
            Category::ProductDevelopment => "Product Development",
            Category::Marketing => "Marketing",
            Category::CustomerAcquisition => "Customer Acquisition",
            Category::Operations => "Operations",
            Category::Buffer => "Buffer (20%)",
        }
    }

    /// Fixed display color (hex RGB).
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Category::TeamSalaries => "#8884d8",
            Category::ProductDevelopment => "#82ca9d",
            Category::Marketing => "#ffc658",
            Category::CustomerAcquisition => "#ff7300",
            Category::Operations => "#00c49f",
            Category::Buffer => "#ff8042",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of the funding breakdown. The amount is unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakdownItem {
    pub category: Category,
    pub amount: Money,
}

/// Result of [`estimate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundingEstimate {
    inputs: FundingInputs,
    breakdown: [BreakdownItem; 6],
    total: u64,
}

impl FundingEstimate {
    /// The inputs this estimate was computed from.
    #[must_use]
    pub fn inputs(&self) -> &FundingInputs {
        &self.inputs
    }

    /// Total funding required, rounded to whole dollars.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The six components in display order.
    #[must_use]
    pub fn breakdown(&self) -> &[BreakdownItem] {
        &self.breakdown
    }

    /// Unrounded sum of the breakdown.
    #[must_use]
    pub fn exact_total(&self) -> Money {
        self.breakdown.iter().map(|item| item.amount).sum()
    }

    /// Amount of a single category.
    #[must_use]
    pub fn amount(&self, category: Category) -> Money {
        self.breakdown
            .iter()
            .find(|item| item.category == category)
            .map_or(Money::ZERO, |item| item.amount)
    }

    /// Share of a category in tenths of a percent.
    #[must_use]
    pub fn share_permille(&self, category: Category) -> u64 {
        self.amount(category).share_permille(self.exact_total())
    }
}

/// Compute the funding estimate for `inputs`.
#[must_use]
pub fn estimate(inputs: &FundingInputs) -> FundingEstimate {
    let months = inputs.timeline_months;

    let team = prorate(
        u64::from(inputs.team_size).saturating_mul(u64::from(inputs.avg_salary)),
        months,
    );
    let development = inputs.complexity.dev_cost();
    let marketing = prorate(inputs.strategy.annual_cost(), months);
    let acquisition = prorate(inputs.acquisition.annual_cost(), months);

    let direct = team
        .saturating_add(development)
        .saturating_add(marketing)
        .saturating_add(acquisition);
    let operations = direct.percent(OPERATIONS_PERCENT);
    let buffer = direct.saturating_add(operations).percent(BUFFER_PERCENT);

    let breakdown = [
        BreakdownItem {
            category: Category::TeamSalaries,
            amount: team,
        },
        BreakdownItem {
            category: Category::ProductDevelopment,
            amount: development,
        },
        BreakdownItem {
            category: Category::Marketing,
            amount: marketing,
        },
        BreakdownItem {
            category: Category::CustomerAcquisition,
            amount: acquisition,
        },
        BreakdownItem {
            category: Category::Operations,
            amount: operations,
        },
        BreakdownItem {
            category: Category::Buffer,
            amount: buffer,
        },
    ];

    let total = breakdown
        .iter()
        .map(|item| item.amount)
        .sum::<Money>()
        .round_dollars();

    FundingEstimate {
        inputs: *inputs,
        breakdown,
        total,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(
        team: u32,
        months: u32,
        salary: u32,
        complexity: Complexity,
        strategy: MarketStrategy,
        acquisition: AcquisitionMode,
    ) -> FundingInputs {
        FundingInputs::new(team, months, salary, complexity, strategy, acquisition)
            .expect("valid inputs")
    }

    #[test]
    fn default_inputs_reference_example() {
        let result = estimate(&FundingInputs::default());

        assert_eq!(result.amount(Category::TeamSalaries), Money::from_dollars(255_000));
        assert_eq!(result.amount(Category::ProductDevelopment), Money::from_dollars(50_000));
        assert_eq!(result.amount(Category::Marketing), Money::from_dollars(15_000));
        assert_eq!(result.amount(Category::CustomerAcquisition), Money::from_dollars(10_000));
        assert_eq!(result.amount(Category::Operations), Money::from_dollars(49_500));
        assert_eq!(result.amount(Category::Buffer), Money::from_dollars(75_900));
        assert_eq!(result.total(), 455_400);
    }

    #[test]
    fn smallest_inputs() {
        let result = estimate(&inputs(
            1,
            6,
            40_000,
            Complexity::Simple,
            MarketStrategy::Local,
            AcquisitionMode::Organic,
        ));
        assert_eq!(result.amount(Category::TeamSalaries), Money::from_dollars(20_000));
        assert_eq!(result.amount(Category::ProductDevelopment), Money::from_dollars(25_000));
        assert_eq!(result.amount(Category::Marketing), Money::from_dollars(7_500));
        assert_eq!(result.amount(Category::CustomerAcquisition), Money::from_dollars(5_000));
        assert_eq!(result.amount(Category::Operations), Money::from_dollars(8_625));
        assert_eq!(result.amount(Category::Buffer), Money::from_dollars(13_225));
        assert_eq!(result.total(), 79_350);
    }

    #[test]
    fn largest_inputs() {
        let result = estimate(&inputs(
            15,
            24,
            150_000,
            Complexity::Complex,
            MarketStrategy::Global,
            AcquisitionMode::Aggressive,
        ));
        assert_eq!(result.amount(Category::TeamSalaries), Money::from_dollars(4_500_000));
        assert_eq!(result.total(), 6_969_000);
    }

    #[test]
    fn fractional_components_stay_exact() {
        let result = estimate(&inputs(
            1,
            9,
            40_001,
            Complexity::Medium,
            MarketStrategy::Local,
            AcquisitionMode::Organic,
        ));
        let team = result.amount(Category::TeamSalaries);
        assert_eq!(team.to_string(), "30000.75");
        assert_eq!(team.to_currency(), "$30,000.75");

        // direct = 30000.75 + 50000 + 11250 + 7500 = 98750.75
        assert_eq!(result.amount(Category::Operations).to_string(), "14812.6125");
        assert_eq!(result.exact_total().round_dollars(), result.total());
    }

    #[test]
    fn breakdown_order_and_colors() {
        let result = estimate(&FundingInputs::default());
        let categories: Vec<_> = result.breakdown().iter().map(|i| i.category).collect();
        assert_eq!(categories, Category::ALL.to_vec());
        assert_eq!(Category::TeamSalaries.color(), "#8884d8");
        assert_eq!(Category::Buffer.label(), "Buffer (20%)");
    }

    #[test]
    fn shares_in_tenths_of_percent() {
        let result = estimate(&FundingInputs::default());
        // 255000 / 455400 = 55.99%
        assert_eq!(result.share_permille(Category::TeamSalaries), 560);
        assert_eq!(format_permille(result.share_permille(Category::TeamSalaries)), "56.0%");
    }

    #[test]
    fn complexity_factor_doubles() {
        assert_eq!(
            Complexity::Complex.factor_halves(),
            2 * Complexity::Medium.factor_halves()
        );
        assert_eq!(
            Complexity::Medium.factor_halves(),
            2 * Complexity::Simple.factor_halves()
        );
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(Money::from_units(4_999).round_dollars(), 0);
        assert_eq!(Money::from_units(5_000).round_dollars(), 1);
        assert_eq!(Money::from_units(15_000).round_dollars(), 2);
    }

    #[test]
    fn out_of_range_inputs_rejected() {
        let err = FundingInputs::new(
            0,
            12,
            85_000,
            Complexity::Medium,
            MarketStrategy::Local,
            AcquisitionMode::Organic,
        );
        assert!(matches!(
            err,
            Err(CompassError::InputOutOfRange { field: "team size", .. })
        ));

        let mut valid = FundingInputs::default();
        assert!(valid.set_timeline_months(27).is_err());
        assert!(matches!(
            valid.set_timeline_months(10),
            Err(CompassError::InputOffStep { step: 3, .. })
        ));
        assert!(valid.set_avg_salary(39_999).is_err());
        assert_eq!(valid, FundingInputs::default());
    }

    #[test]
    fn enum_names_parse() {
        assert_eq!("Complex".parse::<Complexity>(), Ok(Complexity::Complex));
        assert_eq!(" global ".parse::<MarketStrategy>(), Ok(MarketStrategy::Global));
        assert!("viral".parse::<AcquisitionMode>().is_err());
        for mode in AcquisitionMode::ALL {
            assert_eq!(mode.name().parse::<AcquisitionMode>(), Ok(mode));
        }
    }

    #[test]
    fn dollar_formatting() {
        assert_eq!(format_dollars(0), "$0");
        assert_eq!(format_dollars(999), "$999");
        assert_eq!(format_dollars(455_400), "$455,400");
        assert_eq!(format_dollars(6_969_000), "$6,969,000");
    }
}
