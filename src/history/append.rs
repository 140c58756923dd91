//! Append side of the job history.

use crate::errors::AppResult;
use crate::models::job_event::JobEvent;
use crate::models::job_status::JobStatus;
use crate::models::position::Position;
use csv::WriterBuilder;
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Header row, written exactly once when the file is first created.
pub const HISTORY_HEADER: [&str; 4] = ["Timestamp", "Status", "Latitude", "Longitude"];

/// Append one event to the history file.
///
/// When the file does not exist at call time it is created and the
/// header row is written before the data row; otherwise the file is
/// opened in append mode and only the data row is written. The writer
/// is flushed and closed before returning.
pub fn append_record(path: &Path, event: &JobEvent) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let fresh = !path.exists();

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);

    if fresh {
        wtr.write_record(HISTORY_HEADER)?;
    }

    wtr.write_record([
        event.timestamp_str(),
        event.status.as_str().to_string(),
        event.position.lat_str(),
        event.position.lon_str(),
    ])?;

    wtr.flush()?;
    Ok(())
}

/// Log a status change at the current local time.
///
/// Captures the timestamp at call time (second resolution), builds the
/// record, and appends it. No sequencing rules apply here: the file
/// accepts any order of START and END rows.
pub fn append_event(path: &Path, status: JobStatus, position: Position) -> AppResult<()> {
    append_record(path, &JobEvent::now(status, position))
}
