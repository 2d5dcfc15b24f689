//! # Compass CLI Module
//!
//! ## Available Commands
//!
//! - `play` - Interactive journey on stdin/stdout (default)
//! - `estimate` - One-shot funding estimate
//! - `stages` - Overview of the journey stages
//! - `walk` - Non-interactive journey from a list of choices

mod commands;
pub mod interactive;

use crate::AppError;
use crate::config::Config;
use clap::{Args, Parser, Subcommand};
use compass_core::{AcquisitionMode, Complexity, FundingInputs, MarketStrategy};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Founder's Compass
///
/// Walk through the financial decisions of a startup, stage by stage,
/// and estimate how much funding the plan needs.
#[derive(Parser, Debug)]
#[command(name = "compass")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (non-interactive commands)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play the journey interactively
    Play,

    /// Estimate the funding a plan needs
    Estimate(EstimateArgs),

    /// Show the journey stages
    Stages,

    /// Run the journey from a list of choices
    Walk {
        /// A decision as SCENARIO=CHOICE (repeatable)
        #[arg(long = "choose", value_name = "SCENARIO=CHOICE")]
        choices: Vec<String>,
    },
}

/// Estimator overrides; anything unset comes from the config.
#[derive(Args, Debug, Default, Clone)]
pub struct EstimateArgs {
    /// Number of people on the team (1-15)
    #[arg(long)]
    pub team_size: Option<u32>,

    /// Runway in months (6-24, multiples of 3)
    #[arg(long)]
    pub timeline: Option<u32>,

    /// Average annual salary in dollars (40000-150000)
    #[arg(long)]
    pub salary: Option<u32>,

    /// Product complexity (simple, medium, complex)
    #[arg(long)]
    pub complexity: Option<Complexity>,

    /// Market strategy (local, national, global)
    #[arg(long)]
    pub strategy: Option<MarketStrategy>,

    /// Customer acquisition mode (organic, paid, aggressive)
    #[arg(long)]
    pub acquisition: Option<AcquisitionMode>,
}

impl EstimateArgs {
    /// Apply the overrides on top of `inputs`.
    pub fn apply(&self, inputs: &mut FundingInputs) -> Result<(), AppError> {
        if let Some(team_size) = self.team_size {
            inputs.set_team_size(team_size)?;
        }
        if let Some(months) = self.timeline {
            inputs.set_timeline_months(months)?;
        }
        if let Some(salary) = self.salary {
            inputs.set_avg_salary(salary)?;
        }
        if let Some(complexity) = self.complexity {
            inputs.set_complexity(complexity);
        }
        if let Some(strategy) = self.strategy {
            inputs.set_strategy(strategy);
        }
        if let Some(acquisition) = self.acquisition {
            inputs.set_acquisition(acquisition);
        }
        Ok(())
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), AppError> {
    let config = Config::resolve(cli.config.as_deref())?;
    let catalog = config.catalog()?;
    let inputs = config.inputs()?;
    let json_mode = cli.json_mode;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Estimate(args)) => cmd_estimate(&mut out, inputs, &args, json_mode),
        Some(Commands::Stages) => cmd_stages(&mut out, &catalog, json_mode),
        Some(Commands::Walk { choices }) => {
            cmd_walk(&mut out, catalog, inputs, &choices, json_mode)
        }
        Some(Commands::Play) | None => {
            let stdin = std::io::stdin();
            cmd_play(stdin.lock(), &mut out, catalog, inputs)
        }
    }
}
