use crate::{ErrorKind, SigilError};

/// The key of an entry in a [`Set`](crate::Set).
///
/// Keys are either integer indices or names, and are never coerced into one another:
/// `Key::Index(1)` and `Key::Name("1")` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl Key {
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(name),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

macro_rules! impl_from_index {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Key {
                fn from(value: $ty) -> Self {
                    Self::Index(i64::from(value))
                }
            }
        )*
    };
}

impl_from_index!(i32, i64, u32);

macro_rules! impl_try_from_index {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<$ty> for Key {
                type Error = SigilError;

                fn try_from(value: $ty) -> Result<Self, Self::Error> {
                    i64::try_from(value)
                        .map(Self::Index)
                        .map_err(|_| ErrorKind::IndexOutOfRange(value.to_string()).into())
                }
            }
        )*
    };
}

impl_try_from_index!(u64, usize);

/// Key of the item at `position` in a dense `0..n` layout.
///
/// Positions are bounded by `isize::MAX`, which always fits in an `i64`.
pub(crate) fn position_key(position: usize) -> Key {
    Key::Index(position as i64)
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::Key;
    use crate::ErrorKind;

    #[test]
    fn test_index_conversions_are_lossless() {
        assert_eq!(Key::from(u32::MAX), Key::Index(4_294_967_295));
        assert_eq!(Key::try_from(7usize), Ok(Key::Index(7)));

        let err = Key::try_from(u64::MAX).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::IndexOutOfRange(u64::MAX.to_string()));
    }

    #[test]
    fn test_keys_are_never_coerced() {
        assert_ne!(Key::from(1), Key::from("1"));
        assert_eq!(Key::from("1").as_index(), None);
    }
}
