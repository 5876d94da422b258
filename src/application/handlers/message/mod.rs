//! Message command and query handlers.

mod create_message;
mod delete_message;
mod get_message;
mod list_messages;
mod update_message;

pub use create_message::{CreateMessageCommand, CreateMessageHandler};
pub use delete_message::{DeleteMessageCommand, DeleteMessageHandler};
pub use get_message::{GetMessageHandler, GetMessageQuery};
pub use list_messages::{ListMessagesHandler, ListMessagesQuery};
pub use update_message::{UpdateMessageCommand, UpdateMessageHandler};
