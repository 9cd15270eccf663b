use thiserror::Error;

use crate::Key;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("item of type {0} is not valid for set")]
    InvalidItem(String),

    #[error("unknown key {0}")]
    KeyNotFound(Key),

    #[error("invalid regular expression /{pattern}/: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("a character match expects exactly one character, got {0:?}")]
    InvalidCharacter(String),

    #[error("symbol {0} has no pattern")]
    MissingPattern(String),

    #[error("index {0} does not fit an integer key")]
    IndexOutOfRange(String),

    #[error("no integer key follows {0}")]
    IndexOverflow(i64),
}

impl ErrorKind {
    pub fn invalid_item(type_name: &str) -> Self {
        Self::InvalidItem(type_name.to_string())
    }

    pub fn invalid_pattern(pattern: &str, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }
}

fn at_key(key: &Option<Key>) -> String {
    key.as_ref()
        .map(|key| format!(" (at key {key})"))
        .unwrap_or_default()
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}{}", at_key(.key))]
pub struct SigilError {
    /// Kind of error
    kind: ErrorKind,
    /// Key of the set entry which caused the error, if any.
    pub(crate) key: Option<Key>,
}

impl SigilError {
    pub fn new(kind: impl Into<ErrorKind>, key: Option<Key>) -> Self {
        Self {
            kind: kind.into(),
            key,
        }
    }

    /// Attach the set key the error relates to.
    pub fn at(mut self, key: Key) -> Self {
        self.key = Some(key);
        self
    }
}

impl From<ErrorKind> for SigilError {
    fn from(kind: ErrorKind) -> Self {
        Self { kind, key: None }
    }
}

impl SigilError {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, SigilError};
    use crate::Key;

    #[test]
    fn test_display_with_key() {
        let err = SigilError::new(ErrorKind::invalid_item("i32"), Some(Key::Index(3)));
        assert_eq!(err.to_string(), "item of type i32 is not valid for set (at key 3)");
    }

    #[test]
    fn test_display_without_key() {
        let err = SigilError::from(ErrorKind::KeyNotFound(Key::from("baz")));
        assert_eq!(err.to_string(), "unknown key baz");
        assert_eq!(err.key(), None);
    }
}
