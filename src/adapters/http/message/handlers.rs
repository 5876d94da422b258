//! HTTP handlers for message endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::message::{
    CreateMessageCommand, CreateMessageHandler, DeleteMessageCommand, DeleteMessageHandler,
    GetMessageHandler, GetMessageQuery, ListMessagesHandler, ListMessagesQuery,
    UpdateMessageCommand, UpdateMessageHandler,
};
use crate::domain::foundation::{DomainError, MessageId, OrganizationId};
use crate::domain::message::Outcome;

use super::dto::{
    CreateMessageRequest, ErrorResponse, MessageResponse, UpdateMessageRequest,
    ValidationProblemResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct MessageHandlers {
    create_handler: Arc<CreateMessageHandler>,
    update_handler: Arc<UpdateMessageHandler>,
    delete_handler: Arc<DeleteMessageHandler>,
    get_handler: Arc<GetMessageHandler>,
    list_handler: Arc<ListMessagesHandler>,
}

impl MessageHandlers {
    pub fn new(
        create_handler: Arc<CreateMessageHandler>,
        update_handler: Arc<UpdateMessageHandler>,
        delete_handler: Arc<DeleteMessageHandler>,
        get_handler: Arc<GetMessageHandler>,
        list_handler: Arc<ListMessagesHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            delete_handler,
            get_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/v1/organizations/:organization_id/messages - List messages
pub async fn list_messages(
    State(handlers): State<MessageHandlers>,
    Path(organization_id): Path<String>,
) -> Response {
    let organization_id = match parse_organization_id(&organization_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = ListMessagesQuery { organization_id };

    match handlers.list_handler.handle(query).await {
        Ok(messages) => {
            let response: Vec<MessageResponse> = messages.iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => internal_error(e),
    }
}

/// GET /api/v1/organizations/:organization_id/messages/:id - Get one message
pub async fn get_message(
    State(handlers): State<MessageHandlers>,
    Path((organization_id, id)): Path<(String, String)>,
) -> Response {
    let (organization_id, message_id) = match parse_ids(&organization_id, &id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let query = GetMessageQuery {
        organization_id,
        message_id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(Some(message)) => {
            (StatusCode::OK, Json(MessageResponse::from(message))).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Message not found.")),
        )
            .into_response(),
        Err(e) => internal_error(e),
    }
}

/// POST /api/v1/organizations/:organization_id/messages - Create a message
pub async fn create_message(
    State(handlers): State<MessageHandlers>,
    Path(organization_id): Path<String>,
    Json(req): Json<CreateMessageRequest>,
) -> Response {
    let organization_id = match parse_organization_id(&organization_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = CreateMessageCommand {
        organization_id,
        title: req.title,
        content: req.content,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(outcome) => outcome_response(outcome),
        Err(e) => internal_error(e),
    }
}

/// PUT /api/v1/organizations/:organization_id/messages/:id - Update a message
pub async fn update_message(
    State(handlers): State<MessageHandlers>,
    Path((organization_id, id)): Path<(String, String)>,
    Json(req): Json<UpdateMessageRequest>,
) -> Response {
    let (organization_id, message_id) = match parse_ids(&organization_id, &id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = UpdateMessageCommand {
        organization_id,
        message_id,
        title: req.title,
        content: req.content,
        is_active: req.is_active,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(outcome) => outcome_response(outcome),
        Err(e) => internal_error(e),
    }
}

/// DELETE /api/v1/organizations/:organization_id/messages/:id - Delete a message
pub async fn delete_message(
    State(handlers): State<MessageHandlers>,
    Path((organization_id, id)): Path<(String, String)>,
) -> Response {
    let (organization_id, message_id) = match parse_ids(&organization_id, &id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = DeleteMessageCommand {
        organization_id,
        message_id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(outcome) => outcome_response(outcome),
        Err(e) => internal_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Outcome rendering
// ════════════════════════════════════════════════════════════════════════════

/// Renders an outcome as an HTTP response.
///
/// The match is exhaustive over the closed variant set, so a new variant
/// fails compilation here instead of silently falling through.
fn outcome_response(outcome: Outcome) -> Response {
    match outcome {
        Outcome::Created(message) => {
            let location = format!(
                "/api/v1/organizations/{}/messages/{}",
                message.organization_id(),
                message.id()
            );
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(MessageResponse::from(message)),
            )
                .into_response()
        }
        Outcome::Updated | Outcome::Deleted => StatusCode::NO_CONTENT.into_response(),
        Outcome::Success => StatusCode::OK.into_response(),
        Outcome::NotFound(message) => {
            (StatusCode::NOT_FOUND, Json(ErrorResponse::new(message))).into_response()
        }
        Outcome::Conflict(message) => {
            (StatusCode::CONFLICT, Json(ErrorResponse::new(message))).into_response()
        }
        Outcome::ValidationError(errors) => (
            StatusCode::BAD_REQUEST,
            Json(ValidationProblemResponse::new(errors)),
        )
            .into_response(),
    }
}

fn internal_error(error: DomainError) -> Response {
    tracing::error!("message operation failed: {}", error);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Internal server error.")),
    )
        .into_response()
}

fn parse_organization_id(raw: &str) -> Result<OrganizationId, Response> {
    raw.parse::<OrganizationId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Invalid organization ID.")),
        )
            .into_response()
    })
}

fn parse_ids(organization_id: &str, id: &str) -> Result<(OrganizationId, MessageId), Response> {
    let organization_id = parse_organization_id(organization_id)?;
    let message_id = id.parse::<MessageId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Invalid message ID.")),
        )
            .into_response()
    })?;
    Ok((organization_id, message_id))
}
