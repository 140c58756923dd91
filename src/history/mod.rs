//! Durable job history: an append-only CSV file of START/END events.
//!
//! Rows are immutable once written. Nothing in this module updates,
//! deletes, or reorders records; ordering is file-append order.

pub mod append;
pub mod read;

pub use append::{HISTORY_HEADER, append_event, append_record};
pub use read::{RECENT_ROWS, load_history, recent};
