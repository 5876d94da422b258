//! Message Desk - Organization-scoped message management service.
//!
//! Messages are plain title + content records owned by a single
//! organization. All decision logic lives in the application layer,
//! which turns raw requests into typed outcome values.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
