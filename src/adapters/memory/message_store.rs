//! In-Memory Message Store Adapter
//!
//! Stores messages in a map keyed by message id.
//! Useful for testing and development.
//!
//! This adapter does not enforce title uniqueness on the write path; the
//! logic layer's read-before-write check is the only guard, so the
//! benign race described in the store port docs is accepted here.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, MessageId, OrganizationId, Timestamp};
use crate::domain::message::{Message, NewMessage};
use crate::ports::MessageStore;

/// In-memory storage for messages
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageStore {
    messages: Arc<RwLock<HashMap<MessageId, Message>>>,
}

impl InMemoryMessageStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.messages.write().await.clear();
    }

    /// Get the number of stored messages
    pub async fn count(&self) -> usize {
        self.messages.read().await.len()
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn get(
        &self,
        organization_id: &OrganizationId,
        id: &MessageId,
    ) -> Result<Option<Message>, DomainError> {
        let messages = self.messages.read().await;
        Ok(messages
            .get(id)
            .filter(|m| m.organization_id() == organization_id)
            .cloned())
    }

    async fn list_by_organization(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<Message>, DomainError> {
        let messages = self.messages.read().await;
        let mut result: Vec<Message> = messages
            .values()
            .filter(|m| m.organization_id() == organization_id)
            .cloned()
            .collect();
        result.sort_by_key(|m| *m.created_at());
        Ok(result)
    }

    async fn get_by_title(
        &self,
        organization_id: &OrganizationId,
        title: &str,
    ) -> Result<Option<Message>, DomainError> {
        let messages = self.messages.read().await;
        Ok(messages
            .values()
            .find(|m| m.organization_id() == organization_id && m.title() == title)
            .cloned())
    }

    async fn create(&self, draft: NewMessage) -> Result<Message, DomainError> {
        let now = Timestamp::now();
        let message = Message::reconstitute(
            MessageId::new(),
            draft.organization_id,
            draft.title,
            draft.content,
            draft.is_active,
            now,
            now,
        );

        let mut messages = self.messages.write().await;
        messages.insert(*message.id(), message.clone());
        Ok(message)
    }

    async fn update(&self, message: Message) -> Result<Option<Message>, DomainError> {
        let mut messages = self.messages.write().await;
        if !messages.contains_key(message.id()) {
            return Ok(None);
        }
        messages.insert(*message.id(), message.clone());
        Ok(Some(message))
    }

    async fn delete(
        &self,
        organization_id: &OrganizationId,
        id: &MessageId,
    ) -> Result<bool, DomainError> {
        let mut messages = self.messages.write().await;
        let owned = messages
            .get(id)
            .is_some_and(|m| m.organization_id() == organization_id);
        if !owned {
            return Ok(false);
        }
        messages.remove(id);
        Ok(true)
    }
}
