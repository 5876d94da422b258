//! HTTP adapters - REST API implementations.

pub mod message;
pub mod middleware;

pub use message::{message_routes, MessageHandlers};
pub use middleware::{cors_layer, timeout_layer};
