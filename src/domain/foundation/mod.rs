//! Shared domain primitives.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::{MessageId, OrganizationId};
pub use timestamp::Timestamp;
