use std::{borrow::Cow, sync::Arc};

use crate::{ErrorKind, SigilResult, SymbolKind, Typed};

/// A predicate shared between a set and the sets derived from it.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// The name of a type an item must satisfy, see [`Typed::is_a`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeTag(Cow<'static, str>);

impl TypeTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&'static str> for TypeTag {
    fn from(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }
}

impl From<String> for TypeTag {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl From<SymbolKind> for TypeTag {
    fn from(value: SymbolKind) -> Self {
        Self(Cow::Borrowed(value.as_str()))
    }
}

/// The rule a [`Set`](crate::Set) enforces on each of its items.
pub enum Validator<T> {
    /// Every item is accepted.
    None,
    /// Items are accepted when the predicate returns `true`.
    Predicate(Predicate<T>),
    /// Items are accepted when they satisfy the type tag.
    Type(TypeTag),
}

impl<T> Validator<T> {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(f))
    }

    pub fn of_type(tag: impl Into<TypeTag>) -> Self {
        Self::Type(tag.into())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl<T: Typed> Validator<T> {
    pub fn accepts(&self, item: &T) -> bool {
        match self {
            Self::None => true,
            Self::Predicate(predicate) => predicate(item),
            Self::Type(tag) => item.is_a(tag.as_str()),
        }
    }

    /// Check the item, failing with [`ErrorKind::InvalidItem`] naming its type.
    pub fn validate(&self, item: &T) -> SigilResult<()> {
        if self.accepts(item) {
            Ok(())
        } else {
            Err(ErrorKind::invalid_item(item.type_name()).into())
        }
    }
}

impl<T> Default for Validator<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Predicate(predicate) => Self::Predicate(Arc::clone(predicate)),
            Self::Type(tag) => Self::Type(tag.clone()),
        }
    }
}

impl<T> std::fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Predicate(_) => write!(f, "Predicate(..)"),
            Self::Type(tag) => f.debug_tuple("Type").field(tag).finish(),
        }
    }
}
