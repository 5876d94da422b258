//! UpdateMessageHandler - Command handler for updating messages.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, MessageId, OrganizationId};
use crate::domain::message::{validate_title_and_content, FieldErrors, Outcome};
use crate::ports::MessageStore;

/// Command to update an existing message.
#[derive(Debug, Clone)]
pub struct UpdateMessageCommand {
    pub organization_id: OrganizationId,
    pub message_id: MessageId,
    pub title: String,
    pub content: String,
    pub is_active: bool,
}

/// Handler for updating messages.
pub struct UpdateMessageHandler {
    store: Arc<dyn MessageStore>,
}

impl UpdateMessageHandler {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UpdateMessageCommand) -> Result<Outcome, DomainError> {
        // 1. Load the message
        let Some(mut existing) = self
            .store
            .get(&cmd.organization_id, &cmd.message_id)
            .await?
        else {
            return Ok(Outcome::NotFound("Message not found.".to_string()));
        };

        // 2. Inactive messages are frozen; this gate precedes field validation
        if !existing.is_active() {
            return Ok(Outcome::ValidationError(FieldErrors::single(
                "IsActive",
                "Only active messages can be updated.",
            )));
        }

        // 3. Same field rules as create
        let errors = validate_title_and_content(&cmd.title, &cmd.content);
        if !errors.is_empty() {
            return Ok(Outcome::ValidationError(errors));
        }

        // 4. Title must stay unique, but a message may keep its own title
        let title = cmd.title.trim();
        let duplicate = self
            .store
            .get_by_title(&cmd.organization_id, title)
            .await?;
        if let Some(duplicate) = duplicate {
            if duplicate.id() != existing.id() {
                return Ok(Outcome::Conflict(
                    "Title must be unique per organization.".to_string(),
                ));
            }
        }

        // 5. Apply and persist; a vanished row means a delete won the race
        existing.apply_update(
            title.to_string(),
            cmd.content.trim().to_string(),
            cmd.is_active,
        );
        let updated = self.store.update(existing).await?;
        if updated.is_none() {
            return Ok(Outcome::NotFound("Message not found.".to_string()));
        }

        Ok(Outcome::Updated)
    }
}
