//! DeleteMessageHandler - Command handler for deleting messages.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, MessageId, OrganizationId};
use crate::domain::message::{FieldErrors, Outcome};
use crate::ports::MessageStore;

/// Command to delete a message.
#[derive(Debug, Clone)]
pub struct DeleteMessageCommand {
    pub organization_id: OrganizationId,
    pub message_id: MessageId,
}

/// Handler for deleting messages.
pub struct DeleteMessageHandler {
    store: Arc<dyn MessageStore>,
}

impl DeleteMessageHandler {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteMessageCommand) -> Result<Outcome, DomainError> {
        // 1. Load the message
        let Some(existing) = self
            .store
            .get(&cmd.organization_id, &cmd.message_id)
            .await?
        else {
            return Ok(Outcome::NotFound("Message not found.".to_string()));
        };

        // 2. Inactive messages are frozen
        if !existing.is_active() {
            return Ok(Outcome::ValidationError(FieldErrors::single(
                "IsActive",
                "Only active messages can be deleted.",
            )));
        }

        // 3. Remove; nothing removed means a concurrent delete won
        let deleted = self
            .store
            .delete(&cmd.organization_id, &cmd.message_id)
            .await?;
        if !deleted {
            return Ok(Outcome::NotFound("Message not found.".to_string()));
        }

        Ok(Outcome::Deleted)
    }
}
