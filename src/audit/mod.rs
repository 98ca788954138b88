//! Append-only audit log.
//!
//! One [`LogRecord`] is appended per dispatched action, successful or not.
//! The log is a CSV spreadsheet with a fixed header row; existing rows are
//! never rewritten. The file is the tool's only persisted state and is
//! committed back to the repository by the calling workflow.

mod record;
mod writer;


// Re-export public API
pub use record::{HEADER, LogRecord, Outcome, actor_from, current_actor};
pub use writer::AuditLog;
#[cfg(test)]
pub use writer::read_records;
