//! HTTP adapter for message endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateMessageRequest, ErrorResponse, MessageResponse, UpdateMessageRequest,
    ValidationProblemResponse,
};
pub use handlers::MessageHandlers;
pub use routes::message_routes;
