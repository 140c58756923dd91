//! Per-session job flag.
//!
//! The console owns one `Session` value and passes it into each
//! transition; no process-wide mutable state exists. The flag is never
//! persisted: every session starts off the job.

use crate::models::job_status::JobStatus;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub on_job: bool,
}

impl Session {
    /// Fresh session: not on a job.
    pub fn new() -> Self {
        Self { on_job: false }
    }

    /// Flip the flag and report the transition to log. Toggling is the
    /// sole trigger for history writes.
    pub fn toggle(&mut self) -> JobStatus {
        self.on_job = !self.on_job;
        if self.on_job {
            JobStatus::Start
        } else {
            JobStatus::End
        }
    }
}
