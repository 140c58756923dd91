//! Reader side of the job history: load everything, take the tail.

use crate::errors::{AppError, AppResult};
use crate::models::job_event::JobEvent;
use crate::models::job_status::JobStatus;
use crate::models::position::Position;
use csv::ReaderBuilder;
use std::path::Path;

/// How many rows the Recent Activity view shows.
pub const RECENT_ROWS: usize = 5;

/// Load the full history in file order.
///
/// A missing file is an empty history, not an error.
pub fn load_history(path: &Path) -> AppResult<Vec<JobEvent>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut events = Vec::new();

    for (idx, row) in rdr.records().enumerate() {
        let row = row?;
        // line 1 is the header, data starts at line 2
        events.push(parse_row(&row, idx + 2)?);
    }

    Ok(events)
}

/// The last `n` events in file order (no re-sorting).
pub fn recent(events: &[JobEvent], n: usize) -> &[JobEvent] {
    let skip = events.len().saturating_sub(n);
    &events[skip..]
}

fn parse_row(row: &csv::StringRecord, line: usize) -> AppResult<JobEvent> {
    let bad = |reason: String| AppError::MalformedRecord { line, reason };

    let ts_raw = row.get(0).unwrap_or("");
    let status_raw = row.get(1).unwrap_or("");
    let lat_raw = row.get(2).unwrap_or("");
    let lon_raw = row.get(3).unwrap_or("");

    let timestamp = JobEvent::parse_timestamp(ts_raw)
        .ok_or_else(|| bad(format!("bad timestamp '{ts_raw}'")))?;

    let status = JobStatus::from_str(status_raw)
        .ok_or_else(|| bad(format!("unknown status '{status_raw}'")))?;

    let latitude: f64 = lat_raw
        .parse()
        .map_err(|_| bad(format!("bad latitude '{lat_raw}'")))?;

    let longitude: f64 = lon_raw
        .parse()
        .map_err(|_| bad(format!("bad longitude '{lon_raw}'")))?;

    Ok(JobEvent::new(
        timestamp,
        status,
        Position::new(latitude, longitude),
    ))
}
