//! Activity log for the budget tracker
//!
//! Every successful store mutation can be appended to a line-delimited JSON
//! log. The log is write-only from the application's point of view: budget
//! state is never restored from it.
//!
//! - `ActivityEntry`: one mutation, with before/after snapshots
//! - `ActivityLogger`: appends entries to the log file and reads them back
//! - `generate_diff`: "field: old -> new" summary of two snapshots
//!
//! ```rust,ignore
//! use budget_tracker::audit::{ActivityEntry, ActivityLogger, EntityType};
//!
//! let logger = ActivityLogger::new(paths.audit_log());
//! logger.log(&ActivityEntry::create(EntityType::Budget, id.to_string(), Some(name), &budget))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{ActivityEntry, EntityType, Operation};
pub use logger::ActivityLogger;
