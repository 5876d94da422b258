//! Typed outcomes for message operations.
//!
//! Every write operation returns exactly one [`Outcome`] variant per
//! invocation. Expected failures (absence, duplicates, invalid input)
//! are variants here, never errors; the HTTP adapter dispatches on the
//! variant to pick a status code.

use crate::domain::message::Message;
use serde::Serialize;
use std::collections::BTreeMap;

/// Field-level validation errors.
///
/// Maps a field name to the ordered list of messages for that field.
/// Key lookup is case-insensitive ("title" and "Title" address the same
/// entry); the first spelling inserted is the one preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Creates an empty error collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection holding a single field error.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    /// Adds a message for a field, appending if the field already has one.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let existing = self
            .0
            .keys()
            .find(|key| key.eq_ignore_ascii_case(&field))
            .cloned();
        match existing {
            Some(key) => {
                if let Some(messages) = self.0.get_mut(&key) {
                    messages.push(message.into());
                }
            }
            None => {
                self.0.insert(field, vec![message.into()]);
            }
        }
    }

    /// Checks whether any message is recorded for the field.
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.keys().any(|key| key.eq_ignore_ascii_case(field))
    }

    /// Returns the messages recorded for a field, in insertion order.
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(field))
            .map(|(_, messages)| messages.as_slice())
    }

    /// Returns the number of invalid fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether no field has errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Disposition of a message operation.
///
/// Closed set: the HTTP adapter's dispatch is exhaustive, so adding a
/// variant is a compile-time visible change.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A new message was persisted; carries the stored entity.
    Created(Message),
    /// An existing message was mutated.
    Updated,
    /// An existing message was removed.
    Deleted,
    /// Generic success with no payload.
    Success,
    /// The target message does not exist in the given organization.
    NotFound(String),
    /// The operation violates the per-organization title uniqueness rule.
    Conflict(String),
    /// One or more fields failed validation.
    ValidationError(FieldErrors),
}
