//! # Interactive Session
//!
//! A line-oriented shell over a [`Journey`]. One command per line; bad input
//! prints a hint and the session carries on. End of input ends the session.

use crate::{AppError, render};
use compass_core::{
    AcquisitionMode, Complexity, FundingInputs, Journey, MarketStrategy, Position, Transition,
};
use std::io::{BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

const HELP: &str = "\
Commands:
  start                                 Begin the journey
  choose <scenario> <choice|number>     Record a decision (scenario optional
                                        when the stage has only one)
  next                                  Move to the next stage
  back                                  Return to the previous stage
  set <field> <value>                   Change an estimator input; fields:
                                        team, timeline, salary, complexity,
                                        strategy, acquisition
  estimate                              Show the funding calculator
  status                                Show progress
  reset                                 Start over
  help                                  Show this help
  quit                                  Leave the session
";

// =============================================================================
// COMMAND PARSING
// =============================================================================

/// Estimator input addressed by `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Team,
    Timeline,
    Salary,
    Complexity,
    Strategy,
    Acquisition,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Team => "Team Size",
            Field::Timeline => "Timeline",
            Field::Salary => "Average Salary",
            Field::Complexity => "Product Complexity",
            Field::Strategy => "Market Strategy",
            Field::Acquisition => "Customer Acquisition",
        }
    }
}

impl FromStr for Field {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "team" | "team-size" | "team_size" => Ok(Field::Team),
            "timeline" | "months" => Ok(Field::Timeline),
            "salary" => Ok(Field::Salary),
            "complexity" => Ok(Field::Complexity),
            "strategy" | "market" => Ok(Field::Strategy),
            "acquisition" => Ok(Field::Acquisition),
            _ => Err(CommandError::UnknownField(s.to_string())),
        }
    }
}

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Choose {
        scenario: Option<String>,
        choice: String,
    },
    Next,
    Back,
    Set {
        field: Field,
        value: String,
    },
    Estimate,
    Status,
    Help,
    Reset,
    Quit,
}

/// Input that does not parse as a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (type `help` for a list)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("unknown field '{0}' (expected team, timeline, salary, complexity, strategy or acquisition)")]
    UnknownField(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((head, args)) = words.split_first() else {
            return Err(CommandError::Usage("help"));
        };

        let bare = |command: Command, usage: &'static str| {
            if args.is_empty() {
                Ok(command)
            } else {
                Err(CommandError::Usage(usage))
            }
        };

        match head.to_ascii_lowercase().as_str() {
            "start" | "begin" => bare(Command::Start, "start"),
            "next" => bare(Command::Next, "next"),
            "back" | "prev" => bare(Command::Back, "back"),
            "estimate" | "calc" => bare(Command::Estimate, "estimate"),
            "status" => bare(Command::Status, "status"),
            "help" | "?" => bare(Command::Help, "help"),
            "reset" => bare(Command::Reset, "reset"),
            "quit" | "exit" | "q" => bare(Command::Quit, "quit"),
            "choose" | "pick" => match args {
                [choice] => Ok(Command::Choose {
                    scenario: None,
                    choice: (*choice).to_string(),
                }),
                [scenario, choice] => Ok(Command::Choose {
                    scenario: Some((*scenario).to_string()),
                    choice: (*choice).to_string(),
                }),
                _ => Err(CommandError::Usage("choose <scenario> <choice|number>")),
            },
            "set" => match args {
                [field, value] => Ok(Command::Set {
                    field: field.parse()?,
                    value: (*value).to_string(),
                }),
                _ => Err(CommandError::Usage("set <field> <value>")),
            },
            _ => Err(CommandError::Unknown((*head).to_string())),
        }
    }
}

// =============================================================================
// SHELL
// =============================================================================

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive session state: the journey, the estimator inputs and the
/// output they are rendered to.
pub struct Shell<W: Write> {
    journey: Journey,
    inputs: FundingInputs,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(journey: Journey, inputs: FundingInputs, out: W) -> Self {
        Self {
            journey,
            inputs,
            out,
        }
    }

    pub fn journey(&self) -> &Journey {
        &self.journey
    }

    pub fn inputs(&self) -> &FundingInputs {
        &self.inputs
    }

    /// Give back the output writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<(), AppError> {
        let welcome = render::welcome(self.journey.catalog());
        self.print(&welcome)?;
        self.print("\nType `start` to begin your journey, or `help` for commands.\n")?;

        for line in input.lines() {
            if self.handle(&line?)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Handle one line of input.
    pub fn handle(&mut self, line: &str) -> Result<Flow, AppError> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                self.print(&format!("{}\n", e))?;
                return Ok(Flow::Continue);
            }
        };
        tracing::debug!("Command: {:?}", command);

        match command {
            Command::Start => {
                let outcome = self.journey.start();
                self.after_move(outcome)?;
            }
            Command::Choose { scenario, choice } => self.choose(scenario.as_deref(), &choice)?,
            Command::Next => {
                if self.journey.is_finished() {
                    let text = render::completion(&self.journey);
                    self.print(&text)?;
                } else {
                    let outcome = self.journey.advance();
                    self.after_move(outcome)?;
                }
            }
            Command::Back => {
                let outcome = self.journey.retreat();
                self.after_move(outcome)?;
            }
            Command::Set { field, value } => self.set(field, &value)?,
            Command::Estimate => {
                let text = render::funding_panel(self.journey.update_funding(&self.inputs));
                self.print(&text)?;
            }
            Command::Status => {
                let text = format!(
                    "{}{}",
                    render::progress_strip(&self.journey),
                    render::navigation(&self.journey)
                );
                self.print(&text)?;
            }
            Command::Help => self.print(HELP)?,
            Command::Reset => {
                self.journey.reset();
                tracing::debug!("Journey reset");
                let text = render::welcome(self.journey.catalog());
                self.print(&text)?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    // =========================================================================
    // HANDLERS
    // =========================================================================

    fn after_move(&mut self, outcome: Transition) -> Result<(), AppError> {
        match outcome {
            Transition::Applied => {
                tracing::debug!("Moved to {:?}", self.journey.position());
                self.show_stage()
            }
            Transition::Refused(reason) => {
                tracing::info!("Refused: {}", reason);
                self.print(&format!("Cannot do that: {}\n", reason))
            }
        }
    }

    fn show_stage(&mut self) -> Result<(), AppError> {
        let hosts_estimator = self
            .journey
            .current_stage()
            .is_some_and(|stage| stage.scenarios.iter().any(|s| s.hosts_estimator));
        if hosts_estimator {
            let _ = self.journey.update_funding(&self.inputs);
        }
        let text = format!(
            "{}{}\n{}",
            render::progress_strip(&self.journey),
            render::stage_view(&self.journey),
            render::navigation(&self.journey)
        );
        self.print(&text)
    }

    fn choose(&mut self, scenario: Option<&str>, choice: &str) -> Result<(), AppError> {
        if self.journey.position() == Position::NotStarted {
            return self.print("Cannot do that: the journey has not started yet\n");
        }

        let scenario_key = match scenario {
            Some(key) => key.to_string(),
            None => match self.journey.current_stage().map(|s| s.scenarios.as_slice()) {
                Some([only]) => only.key.to_string(),
                _ => return self.print("usage: choose <scenario> <choice|number>\n"),
            },
        };

        // A number picks from the scenario's list, counting from one.
        let picked = match (
            choice.parse::<usize>(),
            self.journey.catalog().scenario(&scenario_key),
        ) {
            (Ok(n), Some((_, found))) => n
                .checked_sub(1)
                .and_then(|i| found.choices.get(i))
                .map(|c| c.key.to_string())
                .ok_or_else(|| {
                    format!(
                        "Pick a number between 1 and {} for '{}'\n",
                        found.choices.len(),
                        scenario_key
                    )
                }),
            _ => Ok(choice.to_string()),
        };
        let choice_key = match picked {
            Ok(key) => key,
            Err(hint) => return self.print(&hint),
        };

        match self.journey.record_choice(&scenario_key, &choice_key) {
            Transition::Applied => {
                tracing::debug!("Recorded {}={}", scenario_key, choice_key);
                let text = match self.journey.catalog().scenario(&scenario_key) {
                    Some((_, found)) => format!(
                        "{}\n{}",
                        render::scenario_card(&self.journey, found),
                        render::navigation(&self.journey)
                    ),
                    None => String::new(),
                };
                self.print(&text)
            }
            Transition::Refused(reason) => {
                tracing::info!("Refused {}={}: {}", scenario_key, choice_key, reason);
                self.print(&format!("Cannot do that: {}\n", reason))
            }
        }
    }

    fn set(&mut self, field: Field, value: &str) -> Result<(), AppError> {
        let mut inputs = self.inputs;
        let applied = match field {
            Field::Team | Field::Timeline | Field::Salary => match value.parse::<u32>() {
                Ok(n) => match field {
                    Field::Team => inputs.set_team_size(n),
                    Field::Timeline => inputs.set_timeline_months(n),
                    _ => inputs.set_avg_salary(n),
                },
                Err(_) => {
                    return self.print(&format!("'{}' is not a whole number\n", value));
                }
            },
            Field::Complexity => value
                .parse::<Complexity>()
                .map(|c| inputs.set_complexity(c)),
            Field::Strategy => value
                .parse::<MarketStrategy>()
                .map(|s| inputs.set_strategy(s)),
            Field::Acquisition => value
                .parse::<AcquisitionMode>()
                .map(|a| inputs.set_acquisition(a)),
        };

        if let Err(e) = applied {
            tracing::info!("Rejected {} = {}: {}", field.label(), value, e);
            return self.print(&format!("{}\n", e));
        }

        self.inputs = inputs;
        let total = self.journey.update_funding(&self.inputs).total();
        tracing::debug!("{} set to {}, total {}", field.label(), value, total);
        let text = format!(
            "{} set to {}. Total Funding Required: {}\n",
            field.label(),
            value,
            compass_core::format_dollars(total)
        );
        self.print(&text)
    }

    fn print(&mut self, text: &str) -> Result<(), AppError> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
