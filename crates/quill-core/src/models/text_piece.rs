use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One submitted block of text, as stored.
///
/// `id` is assigned by the store and never reused; `content` is kept exactly
/// as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextPiece {
    pub id: i64,
    pub content: String,
}

/// A validated submission that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTextPiece {
    content: String,
}

impl NewTextPiece {
    /// Validate submitted content. Whitespace is preserved; only a missing
    /// or zero-length value is rejected.
    pub fn new(content: impl Into<String>) -> Result<Self, CoreError> {
        let content = content.into();
        if content.is_empty() {
            return Err(CoreError::EmptyField("content".to_string()));
        }
        Ok(Self { content })
    }

    /// Build from an optional form field, treating absence as an error.
    pub fn from_field(content: Option<String>) -> Result<Self, CoreError> {
        let content = content.ok_or_else(|| CoreError::MissingField("content".to_string()))?;
        Self::new(content)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}
