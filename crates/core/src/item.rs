//! Item domain rules.
//!
//! The only rule the service enforces on an item is that its title is
//! present and non-empty. Whitespace is preserved as sent; trimming is a
//! client-side concern.

use crate::error::CoreError;

/// Entity name used in `NotFound` errors and log fields.
pub const ENTITY_NAME: &str = "Item";

/// Message returned when a create request carries no usable title.
pub const TITLE_REQUIRED: &str = "Title is required";

/// Validate a candidate title, returning it unchanged when acceptable.
///
/// Both an absent title and the empty string are rejected with
/// `CoreError::Validation`.
pub fn validate_title(title: Option<&str>) -> Result<&str, CoreError> {
    match title {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(CoreError::Validation(TITLE_REQUIRED.to_string())),
    }
}
