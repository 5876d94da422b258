//! Adapters - Implementations of port interfaces.
//!
//! - `http` - REST API exposing message operations
//! - `memory` - In-memory message store for development and tests

pub mod http;
pub mod memory;

pub use memory::InMemoryMessageStore;
