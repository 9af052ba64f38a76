//! Note title validation.
//!
//! A title doubles as the note's filename stem, so it must be
//! filesystem-safe. Unsafe titles are rejected rather than rewritten: a
//! silently sanitized title would no longer round-trip through read/list.

use crate::errors::CoreError;

/// Validate a title for use as a note identifier.
pub fn validate(title: &str) -> Result<(), CoreError> {
    if title.is_empty() {
        return Err(CoreError::InvalidTitle("title is empty".to_string()));
    }
    if title != title.trim() {
        return Err(CoreError::InvalidTitle(format!(
            "title has leading or trailing whitespace: '{title}'"
        )));
    }
    if title == "." || title == ".." || title.starts_with('.') {
        return Err(CoreError::InvalidTitle(format!(
            "title may not start with '.': '{title}'"
        )));
    }
    if let Some(bad) = title.chars().find(|c| !is_safe_char(*c)) {
        return Err(CoreError::InvalidTitle(format!(
            "title contains path-unsafe character '{bad}': '{title}'"
        )));
    }
    Ok(())
}

fn is_safe_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.')
}

/// Filename for a validated title.
pub fn file_name(title: &str) -> String {
    format!("{title}.md")
}
