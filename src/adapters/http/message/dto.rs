//! HTTP DTOs for message endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::message::{FieldErrors, Message};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new message.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMessageRequest {
    pub title: String,
    pub content: String,
}

/// Request to update an existing message.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMessageRequest {
    pub title: String,
    pub content: String,
    pub is_active: bool,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Full message view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub organization_id: String,
    pub title: String,
    pub content: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id().to_string(),
            organization_id: message.organization_id().to_string(),
            title: message.title().to_string(),
            content: message.content().to_string(),
            is_active: message.is_active(),
            created_at: message.created_at().as_datetime().to_rfc3339(),
            updated_at: message.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self::from(&message)
    }
}

/// Standard error response for not-found, conflict, and internal errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Validation failure response carrying the field-error mapping.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationProblemResponse {
    pub errors: FieldErrors,
}

impl ValidationProblemResponse {
    pub fn new(errors: FieldErrors) -> Self {
        Self { errors }
    }
}
