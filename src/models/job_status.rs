use serde::Serialize;

/// Marker for the two job transitions a technician can log.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Start,
    End,
}

impl JobStatus {
    /// Convert enum → history-file string.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Start => "START",
            JobStatus::End => "END",
        }
    }

    /// Convert history-file string → enum.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "START" => Some(JobStatus::Start),
            "END" => Some(JobStatus::End),
            _ => None,
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, JobStatus::Start)
    }

    pub fn is_end(&self) -> bool {
        matches!(self, JobStatus::End)
    }
}
