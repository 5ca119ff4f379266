//! Journal Module - Entries, their validation and list limits.

mod entry;
mod sanitize;

pub use entry::{
    validate_content, JournalEntry, JournalEntryUpdate, NewJournalEntry, MAX_CONTENT_LENGTH,
};
pub use sanitize::sanitize_text;

use crate::domain::foundation::ValidationError;

/// Page size used when a listing does not ask for one.
pub const DEFAULT_LIST_LIMIT: u32 = 10;

/// Largest page size a listing may ask for.
pub const MAX_LIST_LIMIT: u32 = 100;

/// Validated page size for entry listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLimit(u32);

impl ListLimit {
    /// Accepts 1..=100, defaulting to 10 when absent.
    pub fn new(requested: Option<i64>) -> Result<Self, ValidationError> {
        match requested {
            None => Ok(Self(DEFAULT_LIST_LIMIT)),
            Some(n) if (1..=MAX_LIST_LIMIT as i64).contains(&n) => Ok(Self(n as u32)),
            Some(n) => Err(ValidationError::out_of_range(
                "limit",
                1,
                MAX_LIST_LIMIT as i32,
                n.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            )),
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for ListLimit {
    fn default() -> Self {
        Self(DEFAULT_LIST_LIMIT)
    }
}
