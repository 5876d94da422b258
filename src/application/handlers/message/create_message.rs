//! CreateMessageHandler - Command handler for creating messages.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, OrganizationId};
use crate::domain::message::{validate_title_and_content, NewMessage, Outcome};
use crate::ports::MessageStore;

/// Command to create a new message.
#[derive(Debug, Clone)]
pub struct CreateMessageCommand {
    pub organization_id: OrganizationId,
    pub title: String,
    pub content: String,
}

/// Handler for creating messages.
pub struct CreateMessageHandler {
    store: Arc<dyn MessageStore>,
}

impl CreateMessageHandler {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CreateMessageCommand) -> Result<Outcome, DomainError> {
        // 1. Validate both fields, collecting every failure
        let errors = validate_title_and_content(&cmd.title, &cmd.content);
        if !errors.is_empty() {
            return Ok(Outcome::ValidationError(errors));
        }

        // 2. Title must be unique within the organization
        let title = cmd.title.trim();
        let existing = self
            .store
            .get_by_title(&cmd.organization_id, title)
            .await?;
        if existing.is_some() {
            return Ok(Outcome::Conflict(
                "Title must be unique per organization.".to_string(),
            ));
        }

        // 3. Persist; the store assigns id and timestamps
        let draft = NewMessage::new(
            cmd.organization_id,
            title.to_string(),
            cmd.content.trim().to_string(),
        );
        let created = self.store.create(draft).await?;

        Ok(Outcome::Created(created))
    }
}
