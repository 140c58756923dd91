//! Stateless projection of console state into printable text.
//!
//! Nothing here reads files or mutates state; the caller hands in the
//! state and the already-loaded history rows and gets a page back.

use crate::core::calculator::ohms_law::power_and_resistance;
use crate::core::calculator::sensible_heat::sensible_heat_btuh;
use crate::core::console::{ConsoleState, Tab};
use crate::core::viewer;
use crate::history::{self, RECENT_ROWS};
use crate::models::job_event::JobEvent;
use crate::models::position::Position;
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::{bold, italic, thousands, two_decimals};
use ansi_term::Colour;

/// Full console page: title, job panel, active calculator, recent rows.
/// `events` is `None` when no history file exists yet: the Recent
/// Activity section is skipped entirely, not shown empty.
pub fn page(state: &ConsoleState, events: Option<&[JobEvent]>, position: Position) -> String {
    let mut out = String::new();

    out.push_str(&title());
    out.push_str(&job_panel(state, position));
    out.push_str(&calculators(state));
    out.push_str(&recent_activity(events));

    out
}

fn title() -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", bold("🛠️  Repair Tech Assistant")));
    out.push_str(&format!("{}\n", italic("HVAC • Electronics • Appliances")));
    out
}

fn job_panel(state: &ConsoleState, position: Position) -> String {
    let mut out = String::new();

    let status = if state.session.on_job {
        Colour::Green.bold().paint("● ON JOB").to_string()
    } else {
        format!("{GREY}○ off job{RESET}")
    };

    let action = if state.session.on_job {
        format!(
            "{} {GREY}(type 'end'){RESET}",
            Colour::Red.paint("🛑 END JOB")
        )
    } else {
        format!(
            "{} {GREY}(type 'start'){RESET}",
            Colour::Green.paint("▶️  START JOB")
        )
    };

    out.push_str(&format!("\nStatus   : {status}\n"));
    out.push_str(&format!("Position : {position}  (simulated)\n"));
    out.push_str(&format!("Action   : {action}\n"));
    out
}

fn calculators(state: &ConsoleState) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", bold("Calculations")));
    out.push_str(&format!("{}\n", tab_bar(state.tab)));

    match state.tab {
        Tab::OhmsLaw => out.push_str(&ohms_panel(state)),
        Tab::HvacHeat => out.push_str(&hvac_panel(state)),
    }

    out
}

fn tab_bar(active: Tab) -> String {
    [Tab::OhmsLaw, Tab::HvacHeat]
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[ {} ]", bold(tab.title()))
            } else {
                format!("{GREY}  {}  {RESET}", tab.title())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn ohms_panel(state: &ConsoleState) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", italic("Power & Resistance")));
    out.push_str(&format!("Voltage (V)  : {}\n", state.volts));
    out.push_str(&format!("Amperage (A) : {}\n", state.amps));

    match power_and_resistance(state.volts, state.amps) {
        Some(reading) => {
            out.push_str(&format!("Power (Watts) : {} W\n", reading.watts));
            out.push_str(&format!(
                "Resistance    : {} Ω\n",
                two_decimals(reading.ohms)
            ));
        }
        None => {
            out.push_str(&format!(
                "{GREY}no reading: amperage must be above zero{RESET}\n"
            ));
        }
    }

    out
}

fn hvac_panel(state: &ConsoleState) -> String {
    let mut out = String::new();

    let btuh = sensible_heat_btuh(state.airflow, state.delta_t);

    out.push_str(&format!("{}\n", italic("Sensible Heat Formula")));
    out.push_str(&format!("Airflow (CFM)       : {}\n", state.airflow));
    out.push_str(&format!("Temp Rise/Drop (ΔT) : {}\n", state.delta_t));
    out.push_str(&format!("Total BTU/h : {}\n", thousands(btuh)));

    out
}

fn recent_activity(events: Option<&[JobEvent]>) -> String {
    let Some(events) = events else {
        return String::new();
    };

    let mut out = String::new();
    out.push_str(&format!("\n{}\n", bold("Recent Activity")));
    out.push_str(&viewer::activity_table(history::recent(events, RECENT_ROWS)).render());
    out
}

/// Command reference shown for `help`.
pub fn help() -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", bold("Commands")));
    out.push_str("  start | s          begin a job (logs a START event)\n");
    out.push_str("  end | e            close the job (logs an END event)\n");
    out.push_str("  toggle | t         flip the job flag either way\n");
    out.push_str("  volts | v <n>      set voltage for Ohm's law\n");
    out.push_str("  amps | a <n>       set amperage for Ohm's law\n");
    out.push_str("  cfm | f <n>        set airflow for sensible heat\n");
    out.push_str("  dt | d <n>         set temperature differential\n");
    out.push_str("  tab ohm|hvac       switch the calculator tab\n");
    out.push_str("  refresh | r        redraw the page\n");
    out.push_str("  help | h | ?       show this reference\n");
    out.push_str("  quit | q           leave the console\n");

    out
}
