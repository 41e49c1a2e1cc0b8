//! Task constants and validation functions.

use chrono::NaiveDate;

/// Value of the legacy coarse `status` field when a task is done.
pub const STATUS_COMPLETE: &str = "complete";

/// Value of the legacy coarse `status` field when a task is open.
pub const STATUS_INCOMPLETE: &str = "incomplete";

/// Validate a create payload: `title`, `type`, and `date` must be present.
///
/// Presence only — an empty title is accepted, and the category is free
/// text (new categories come into existence by being used).
pub fn validate_new_task(
    title: Option<&str>,
    task_type: Option<&str>,
    date: Option<NaiveDate>,
) -> Result<(), String> {
    if title.is_none() {
        return Err("Field 'title' is required".to_string());
    }
    if task_type.is_none() {
        return Err("Field 'type' is required".to_string());
    }
    if date.is_none() {
        return Err("Field 'date' is required".to_string());
    }
    Ok(())
}
