//! Interactive operator console.
//!
//! Every input line maps to an [`Action`]; [`update`] is a pure
//! transition from (state, action) to the next state plus an optional
//! effect; the loop performs effects (history appends) and re-renders.
//! Rendering itself lives in [`crate::core::render`] as a stateless
//! projection.

use crate::config::Config;
use crate::core::calculator::sensible_heat::{delta_t_plausible, validate_airflow};
use crate::core::render;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::history;
use crate::models::job_event::JobEvent;
use crate::models::job_status::JobStatus;
use crate::models::position::Position;
use crate::ui::messages;
use crate::utils::number::parse_number;
use crate::utils::path::expand_tilde;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Calculator tab currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    OhmsLaw,
    HvacHeat,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::OhmsLaw => "Ohm's Law",
            Tab::HvacHeat => "HVAC Heat",
        }
    }
}

/// Everything one interaction can do.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Begin a job (only when off the job).
    StartJob,
    /// Close the running job (only when on the job).
    EndJob,
    /// Flip the job flag regardless of its current value.
    ToggleJob,
    SetVolts(f64),
    SetAmps(f64),
    SetAirflow(f64),
    SetDeltaT(f64),
    SelectTab(Tab),
    Help,
    /// Re-render with no state change (an empty line does this too).
    Refresh,
    Quit,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    LogEvent(JobStatus),
}

/// Feedback line to show after the page is redrawn.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    None,
    Success(String),
    Warning(String),
    Error(String),
    ShowHelp,
}

/// Console state: the session flag plus the current calculator inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleState {
    pub session: Session,
    pub volts: f64,
    pub amps: f64,
    pub airflow: f64,
    pub delta_t: f64,
    pub tab: Tab,
}

impl ConsoleState {
    /// Input defaults: 120 V, 0 A, 400 CFM, ΔT 20.
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            volts: 120.0,
            amps: 0.0,
            airflow: 400.0,
            delta_t: 20.0,
            tab: Tab::OhmsLaw,
        }
    }
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one input line into an action.
pub fn parse_action(line: &str) -> AppResult<Action> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or("").to_lowercase();
    let arg = parts.next();

    let action = match verb.as_str() {
        "start" | "s" => Action::StartJob,
        "end" | "e" => Action::EndJob,
        "toggle" | "t" => Action::ToggleJob,
        "volts" | "v" => Action::SetVolts(number_arg(&verb, arg)?),
        "amps" | "a" => Action::SetAmps(number_arg(&verb, arg)?),
        "cfm" | "f" => Action::SetAirflow(number_arg(&verb, arg)?),
        "dt" | "d" => Action::SetDeltaT(number_arg(&verb, arg)?),
        "tab" => match arg.map(str::to_lowercase).as_deref() {
            Some("ohm") | Some("ohms") | Some("1") => Action::SelectTab(Tab::OhmsLaw),
            Some("hvac") | Some("heat") | Some("2") => Action::SelectTab(Tab::HvacHeat),
            _ => {
                return Err(AppError::UnknownAction(
                    "tab needs 'ohm' or 'hvac'".to_string(),
                ));
            }
        },
        "help" | "h" | "?" => Action::Help,
        "" | "refresh" | "r" => Action::Refresh,
        "quit" | "q" | "exit" => Action::Quit,
        other => return Err(AppError::UnknownAction(other.to_string())),
    };

    Ok(action)
}

fn number_arg(verb: &str, arg: Option<&str>) -> AppResult<f64> {
    let raw = arg
        .ok_or_else(|| AppError::UnknownAction(format!("'{verb}' needs a numeric value")))?;
    parse_number(raw)
}

/// Pure transition: reads the current state, returns the next state,
/// the effect to perform, and the feedback to show. Never touches the
/// filesystem or the terminal.
pub fn update(
    state: &ConsoleState,
    action: &Action,
    cfg: &Config,
) -> AppResult<(ConsoleState, Option<Effect>, Feedback)> {
    let mut next = state.clone();

    let (effect, feedback) = match action {
        Action::StartJob => {
            if next.session.on_job {
                (
                    None,
                    Feedback::Warning(
                        "Already on a job. Type 'end' to close it first.".to_string(),
                    ),
                )
            } else {
                let status = next.session.toggle();
                (Some(Effect::LogEvent(status)), Feedback::None)
            }
        }
        Action::EndJob => {
            if next.session.on_job {
                let status = next.session.toggle();
                (Some(Effect::LogEvent(status)), Feedback::None)
            } else {
                (
                    None,
                    Feedback::Warning("Not on a job yet. Type 'start' to begin one.".to_string()),
                )
            }
        }
        Action::ToggleJob => {
            let status = next.session.toggle();
            (Some(Effect::LogEvent(status)), Feedback::None)
        }
        Action::SetVolts(v) => {
            next.volts = *v;
            (None, Feedback::None)
        }
        Action::SetAmps(v) => {
            next.amps = *v;
            (None, Feedback::None)
        }
        Action::SetAirflow(v) => {
            validate_airflow(*v)?;
            next.airflow = *v;
            (None, Feedback::None)
        }
        Action::SetDeltaT(v) => {
            next.delta_t = *v;
            if delta_t_plausible(*v, cfg.max_delta_t) {
                (None, Feedback::None)
            } else {
                (
                    None,
                    Feedback::Warning(format!(
                        "ΔT of {v} °F is outside the plausible range. Double-check the reading."
                    )),
                )
            }
        }
        Action::SelectTab(tab) => {
            next.tab = *tab;
            (None, Feedback::None)
        }
        Action::Help => (None, Feedback::ShowHelp),
        Action::Refresh | Action::Quit => (None, Feedback::None),
    };

    Ok((next, effect, feedback))
}

pub struct ConsoleLogic;

impl ConsoleLogic {
    /// Run the console until `quit` or end of input.
    pub fn run(cfg: &Config) -> AppResult<()> {
        let history_path = expand_tilde(&cfg.history);
        let position = Position::from_config(cfg);
        let mut state = ConsoleState::new();

        draw(&state, &history_path, position);
        messages::hint("Type 'help' for commands, 'quit' to leave.");

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            prompt()?;

            let Some(line) = lines.next() else { break };
            let line = line?;

            let action = match parse_action(&line) {
                Ok(action) => action,
                Err(e) => {
                    messages::error(&e);
                    continue;
                }
            };

            if action == Action::Quit {
                break;
            }

            let feedback = match update(&state, &action, cfg) {
                Ok((next, effect, feedback)) => {
                    state = next;
                    match effect {
                        Some(Effect::LogEvent(status)) => {
                            log_transition(&history_path, status, position)
                        }
                        None => feedback,
                    }
                }
                Err(e) => {
                    messages::error(&e);
                    continue;
                }
            };

            if feedback == Feedback::ShowHelp {
                println!("{}", render::help());
                continue;
            }

            draw(&state, &history_path, position);
            emit(feedback);
        }

        messages::info(format!(
            "Console closed. Job history: {}",
            history_path.display()
        ));
        Ok(())
    }
}

/// Append the transition to the history and describe the outcome.
/// Uses the timestamp that actually went into the file.
fn log_transition(path: &Path, status: JobStatus, position: Position) -> Feedback {
    let event = JobEvent::now(status, position);

    if let Err(e) = history::append_record(path, &event) {
        return Feedback::Error(format!("Could not write job history: {e}"));
    }

    let at = event.timestamp.format("%H:%M:%S");
    match status {
        JobStatus::Start => Feedback::Success(format!("▶️  Job started at {at}.")),
        JobStatus::End => Feedback::Warning(format!("🛑 Job ended at {at}.")),
    }
}

/// Read whatever the history holds and print the full page. A missing
/// file renders no Recent Activity section at all; an unreadable one
/// degrades to that with a warning.
fn draw(state: &ConsoleState, history_path: &Path, position: Position) {
    let events = if history_path.exists() {
        match history::load_history(history_path) {
            Ok(events) => Some(events),
            Err(e) => {
                messages::warning(format!("History unreadable: {e}"));
                None
            }
        }
    } else {
        None
    };

    print!("{}", render::page(state, events.as_deref(), position));
}

fn emit(feedback: Feedback) {
    match feedback {
        Feedback::None | Feedback::ShowHelp => {}
        Feedback::Success(msg) => messages::success(msg),
        Feedback::Warning(msg) => messages::warning(msg),
        Feedback::Error(msg) => messages::error(msg),
    }
}

fn prompt() -> AppResult<()> {
    print!("\nfieldaid> ");
    io::stdout().flush()?;
    Ok(())
}
