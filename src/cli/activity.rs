//! Activity log command

use crate::audit::ActivityLogger;
use crate::config::TrackerPaths;
use crate::error::TrackerResult;

/// Print the most recent activity entries, oldest first
pub fn handle_log_command(paths: &TrackerPaths, count: usize) -> TrackerResult<()> {
    let logger = ActivityLogger::new(paths.audit_log());
    println!("{}", render_log(&logger, count)?);
    Ok(())
}

pub fn render_log(logger: &ActivityLogger, count: usize) -> TrackerResult<String> {
    let entries = logger.read_recent(count)?;
    if entries.is_empty() {
        return Ok("No activity recorded.".to_string());
    }

    Ok(entries
        .iter()
        .map(|entry| entry.format_human_readable())
        .collect::<Vec<_>>()
        .join("\n"))
}
