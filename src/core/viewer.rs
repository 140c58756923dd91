//! Read side of the job history: table building and the `log` command.

use crate::errors::{AppError, AppResult};
use crate::history;
use crate::models::job_event::JobEvent;
use crate::ui::messages;
use crate::utils::colors::colorize_status;
use crate::utils::table::Table;
use std::path::Path;

/// Build the activity table shown in the console and by `fieldaid log`.
/// Rows keep file order; the status cell is colorized.
pub fn activity_table(events: &[JobEvent]) -> Table {
    let mut table = Table::new(["Timestamp", "Status", "Latitude", "Longitude"]);

    for ev in events {
        table.add_row(vec![
            ev.timestamp_str(),
            colorize_status(ev.status.as_str(), ev.status.is_start()),
            ev.position.lat_str(),
            ev.position.lon_str(),
        ]);
    }

    table
}

pub struct ViewerLogic;

impl ViewerLogic {
    /// Print the most recent history rows. `tail` picks how many,
    /// `all` overrides it, `json` swaps the table for a JSON array.
    pub fn print_recent(path: &Path, tail: usize, all: bool, json: bool) -> AppResult<()> {
        if !path.exists() {
            if json {
                println!("[]");
            } else {
                messages::info("No job history yet. Toggle a job in the console to create it.");
            }
            return Ok(());
        }

        let events = history::load_history(path)?;
        let shown = if all {
            &events[..]
        } else {
            history::recent(&events, tail)
        };

        if json {
            let body =
                serde_json::to_string_pretty(shown).map_err(|e| AppError::Other(e.to_string()))?;
            println!("{body}");
            return Ok(());
        }

        println!(
            "📖 Recent activity ({} of {} events):\n",
            shown.len(),
            events.len()
        );
        print!("{}", activity_table(shown).render());

        Ok(())
    }
}
