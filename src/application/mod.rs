//! Application layer - Command and query handlers.
//!
//! This layer holds all decision logic: it orchestrates the message
//! store and turns every request into exactly one typed outcome.

pub mod handlers;

pub use handlers::message::{
    CreateMessageCommand, CreateMessageHandler, DeleteMessageCommand, DeleteMessageHandler,
    GetMessageHandler, GetMessageQuery, ListMessagesHandler, ListMessagesQuery,
    UpdateMessageCommand, UpdateMessageHandler,
};
