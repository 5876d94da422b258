//! Message store port.
//!
//! Defines the contract for persisting and retrieving messages. The
//! store exclusively owns persisted instances; callers receive and pass
//! transient copies. Implementations handle the actual storage.

use crate::domain::foundation::{DomainError, MessageId, OrganizationId};
use crate::domain::message::{Message, NewMessage};
use async_trait::async_trait;

/// Store port for message persistence.
///
/// Every query is scoped to one organization; a message is never visible
/// outside the organization that owns it.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Find a message by id within an organization.
    ///
    /// Returns `None` if not found.
    async fn get(
        &self,
        organization_id: &OrganizationId,
        id: &MessageId,
    ) -> Result<Option<Message>, DomainError>;

    /// Find all messages owned by an organization, active or not.
    async fn list_by_organization(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<Message>, DomainError>;

    /// Find a message by exact (case-sensitive) title within an
    /// organization. Callers pass the trimmed title.
    async fn get_by_title(
        &self,
        organization_id: &OrganizationId,
        title: &str,
    ) -> Result<Option<Message>, DomainError>;

    /// Persist a new message, assigning its id and both timestamps.
    ///
    /// The title-uniqueness check in the logic layer is not transactional
    /// with this call; implementations backed by a real database should
    /// carry a unique index on (organization_id, title) and surface
    /// violations as `DatabaseError`.
    async fn create(&self, draft: NewMessage) -> Result<Message, DomainError>;

    /// Persist changes to an existing message.
    ///
    /// Returns `None` if the message no longer exists (e.g. it was
    /// deleted between the caller's read and this write).
    async fn update(&self, message: Message) -> Result<Option<Message>, DomainError>;

    /// Remove a message. Returns `false` if nothing was removed.
    async fn delete(
        &self,
        organization_id: &OrganizationId,
        id: &MessageId,
    ) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn message_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn MessageStore) {}
    }
}
