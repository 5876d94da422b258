//! Message domain module.
//!
//! - `entity` - The Message entity and the NewMessage draft
//! - `validation` - Shared title/content validation rules
//! - `outcome` - Typed outcomes for message operations

mod entity;
mod outcome;
mod validation;

pub use entity::{Message, NewMessage};
pub use outcome::{FieldErrors, Outcome};
pub use validation::{
    validate_title_and_content, CONTENT_MAX_LENGTH, CONTENT_MIN_LENGTH, TITLE_MAX_LENGTH,
    TITLE_MIN_LENGTH,
};
