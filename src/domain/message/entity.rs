//! Message entity.
//!
//! A message is a title + content record owned by exactly one
//! organization. The store owns persisted instances; the application
//! layer only ever works with transient copies.

use crate::domain::foundation::{MessageId, OrganizationId, Timestamp};
use serde::Serialize;

/// Message entity - one organization-scoped message.
///
/// # Invariants
///
/// - `id` and `organization_id` are immutable after creation
/// - `title` is 3-200 characters after trimming, unique per organization
/// - `content` is 10-1000 characters after trimming
/// - An inactive message cannot be updated or deleted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Unique identifier for this message.
    id: MessageId,

    /// Organization that owns this message.
    organization_id: OrganizationId,

    /// Message title, trimmed.
    title: String,

    /// Message content, trimmed.
    content: String,

    /// Whether the message accepts updates and deletion.
    is_active: bool,

    /// When the message was created.
    created_at: Timestamp,

    /// When the message was last updated.
    updated_at: Timestamp,
}

impl Message {
    /// Reconstitute a message from persistence (no validation).
    pub fn reconstitute(
        id: MessageId,
        organization_id: OrganizationId,
        title: String,
        content: String,
        is_active: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            organization_id,
            title,
            content,
            is_active,
            created_at,
            updated_at,
        }
    }

    /// Returns the message ID.
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the owning organization's ID.
    pub fn organization_id(&self) -> &OrganizationId {
        &self.organization_id
    }

    /// Returns the message title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns whether the message is active.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns when the message was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the message was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Apply an update, refreshing the updated timestamp.
    ///
    /// Callers are responsible for validating and trimming the new values
    /// and for checking the active gate first; the entity records what it
    /// is given.
    pub fn apply_update(&mut self, title: String, content: String, is_active: bool) {
        self.title = title;
        self.content = content;
        self.is_active = is_active;
        self.updated_at = Timestamp::now();
    }
}

/// Draft for a message that has not been persisted yet.
///
/// The store assigns the identifier and both timestamps when it persists
/// the draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub organization_id: OrganizationId,
    pub title: String,
    pub content: String,
    pub is_active: bool,
}

impl NewMessage {
    /// Creates an active draft with pre-trimmed title and content.
    pub fn new(organization_id: OrganizationId, title: String, content: String) -> Self {
        Self {
            organization_id,
            title,
            content,
            is_active: true,
        }
    }
}
