pub mod job_event;
pub mod job_status;
pub mod position;
