//! Validated task label type.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty user-entered task label.
///
/// Leading and trailing whitespace is removed at construction time; input
/// that is empty after trimming is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskText(String);

impl TaskText {
    /// Creates a validated task label.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskText`] when the input is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTaskText);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
