//! ListMessagesHandler - Query handler for listing an organization's messages.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, OrganizationId};
use crate::domain::message::Message;
use crate::ports::MessageStore;

/// Query for all messages owned by an organization.
#[derive(Debug, Clone)]
pub struct ListMessagesQuery {
    pub organization_id: OrganizationId,
}

/// Handler for listing messages.
///
/// Pure delegation: inactive messages are listed alongside active ones.
pub struct ListMessagesHandler {
    store: Arc<dyn MessageStore>,
}

impl ListMessagesHandler {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListMessagesQuery) -> Result<Vec<Message>, DomainError> {
        self.store.list_by_organization(&query.organization_id).await
    }
}
