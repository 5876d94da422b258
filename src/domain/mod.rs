//! Domain layer containing business types and validation.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `message` - Message entity, validation rules, and operation outcomes

pub mod foundation;
pub mod message;
