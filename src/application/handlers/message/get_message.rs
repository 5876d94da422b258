//! GetMessageHandler - Query handler for reading a single message.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, MessageId, OrganizationId};
use crate::domain::message::Message;
use crate::ports::MessageStore;

/// Query for one message by id within an organization.
#[derive(Debug, Clone)]
pub struct GetMessageQuery {
    pub organization_id: OrganizationId,
    pub message_id: MessageId,
}

/// Handler for reading a single message.
///
/// Pure delegation: no validation, no filtering by active flag; inactive
/// messages remain readable.
pub struct GetMessageHandler {
    store: Arc<dyn MessageStore>,
}

impl GetMessageHandler {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetMessageQuery) -> Result<Option<Message>, DomainError> {
        self.store.get(&query.organization_id, &query.message_id).await
    }
}
