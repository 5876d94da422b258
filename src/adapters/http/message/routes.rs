//! HTTP routes for message endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_message, delete_message, get_message, list_messages, update_message, MessageHandlers,
};

/// Creates the message router with all endpoints.
pub fn message_routes(handlers: MessageHandlers) -> Router {
    Router::new()
        .route(
            "/api/v1/organizations/:organization_id/messages",
            get(list_messages).post(create_message),
        )
        .route(
            "/api/v1/organizations/:organization_id/messages/:id",
            get(get_message).put(update_message).delete(delete_message),
        )
        .with_state(handlers)
}
