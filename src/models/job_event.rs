use super::{job_status::JobStatus, position::Position};
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Serialize, Serializer};

/// Timestamp layout shared by the history file and every view of it.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One immutable record in the job history: a START or END marker, the
/// moment it happened, and where.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobEvent {
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime, // local clock, second precision
    pub status: JobStatus,
    #[serde(flatten)]
    pub position: Position,
}

impl JobEvent {
    pub fn new(timestamp: NaiveDateTime, status: JobStatus, position: Position) -> Self {
        Self {
            timestamp,
            status,
            position,
        }
    }

    /// Event stamped with the current local time, truncated to whole
    /// seconds (the file format carries no finer precision).
    pub fn now(status: JobStatus, position: Position) -> Self {
        let now = Local::now().naive_local();
        let timestamp = now.with_nanosecond(0).unwrap_or(now);
        Self::new(timestamp, status, position)
    }

    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Parse a history-file timestamp back into a `NaiveDateTime`.
    pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
    }
}

fn serialize_timestamp<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string())
}
