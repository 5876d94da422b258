//! In-memory adapters.

mod message_store;

pub use message_store::InMemoryMessageStore;
