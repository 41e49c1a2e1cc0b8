//! Message (note) validation functions.

/// Validate note content: must be present and non-empty. Returns the
/// validated text.
///
/// No upper length bound — the storage model is an unbounded append-only
/// note log.
pub fn validate_content(content: Option<&str>) -> Result<&str, String> {
    match content {
        None => Err("Field 'content' is required".to_string()),
        Some("") => Err("Note content cannot be empty".to_string()),
        Some(text) => Ok(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty_content() {
        assert_eq!(validate_content(Some("call recruiter")), Ok("call recruiter"));
    }

    #[test]
    fn rejects_missing_content() {
        assert!(validate_content(None).is_err());
    }

    #[test]
    fn rejects_empty_content() {
        assert!(validate_content(Some("")).is_err());
    }
}
