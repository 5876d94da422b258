//! Shared validation rules for message title and content.
//!
//! Create and update apply the exact same rules. Both fields are always
//! checked; all failures are collected before returning so a caller sees
//! every invalid field at once.

use crate::domain::message::FieldErrors;

/// Minimum title length after trimming.
pub const TITLE_MIN_LENGTH: usize = 3;
/// Maximum title length after trimming.
pub const TITLE_MAX_LENGTH: usize = 200;
/// Minimum content length after trimming.
pub const CONTENT_MIN_LENGTH: usize = 10;
/// Maximum content length after trimming.
pub const CONTENT_MAX_LENGTH: usize = 1000;

/// Validates title and content against the shared rules.
///
/// Lengths are measured on the trimmed value. An empty title reports only
/// the "required" message; empty content reports the generic length
/// message (no dedicated "required" message for content, deliberately).
pub fn validate_title_and_content(title: &str, content: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let title = title.trim();
    if title.is_empty() {
        errors.push("Title", "Title is required.");
    } else {
        let length = title.chars().count();
        if !(TITLE_MIN_LENGTH..=TITLE_MAX_LENGTH).contains(&length) {
            errors.push("Title", "Title must be between 3 and 200 characters.");
        }
    }

    let content = content.trim();
    let length = content.chars().count();
    if !(CONTENT_MIN_LENGTH..=CONTENT_MAX_LENGTH).contains(&length) {
        errors.push("Content", "Content must be between 10 and 1000 characters.");
    }

    errors
}
