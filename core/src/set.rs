use std::fmt::Display;

use indexmap::{map, IndexMap};
use itertools::Itertools as _;
use log::debug;
use prettytable::Table as PtTable;

use crate::key::position_key;
use crate::{ErrorKind, Identical, Key, SigilResult, Typed, Validator};

/// An ordered, key-addressable collection whose items all satisfy a [`Validator`].
///
/// Keys keep their insertion order. Every way of adding an item checks it
/// first, and a rejected item leaves the set untouched.
///
/// # Example
///
/// ```
/// use sigil_core::{Set, Validator};
///
/// let set = Set::new([1, 2, 3, 4]);
///
/// assert_eq!(set.filter(|&i| i == 1 || i == 4).to_vec(), vec![1, 4]);
/// assert_eq!(set.exclude(|&i| i == 1 || i == 4).to_vec(), vec![2, 3]);
///
/// let positives = Set::with_validator([1, -2], Validator::predicate(|i: &i32| *i > 0));
/// assert!(positives.is_err());
/// ```
pub struct Set<T> {
    items: IndexMap<Key, T>,
    validator: Validator<T>,
}

impl<T> Set<T> {
    /// Creates a set without validator, keyed `0..n`.
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (position_key(index), item))
                .collect(),
            validator: Validator::None,
        }
    }

    pub fn validator(&self) -> &Validator<T> {
        &self.validator
    }

    /// Get the item stored at key.
    pub fn get(&self, key: impl Into<Key>) -> SigilResult<&T> {
        let key = key.into();
        self.items
            .get(&key)
            .ok_or_else(|| ErrorKind::KeyNotFound(key).into())
    }

    /// Remove the item stored at key, preserving the order of the others.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<T> {
        self.items.shift_remove(&key.into())
    }

    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.items.contains_key(&key.into())
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check whether the set holds an item *identical* to the given one.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Identical,
    {
        self.items.values().any(|stored| stored.is_identical(item))
    }

    /// Check whether any item passes the predicate.
    pub fn has_matching<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.values().any(|item| predicate(item))
    }

    /// Returns a new set holding the items passing the predicate.
    ///
    /// The items keep their relative order and are re-keyed `0..n`.
    /// The new set carries the same validator.
    pub fn filter<P>(&self, mut predicate: P) -> Set<T>
    where
        P: FnMut(&T) -> bool,
        T: Clone,
    {
        Set {
            items: self
                .items
                .values()
                .filter(|&item| predicate(item))
                .cloned()
                .enumerate()
                .map(|(index, item)| (position_key(index), item))
                .collect(),
            validator: self.validator.clone(),
        }
    }

    /// Returns a new set holding the items *not* passing the predicate.
    pub fn exclude<P>(&self, mut predicate: P) -> Set<T>
    where
        P: FnMut(&T) -> bool,
        T: Clone,
    {
        self.filter(|item| !predicate(item))
    }

    /// Iterate over the `(key, item)` entries in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.items.iter())
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> + '_ {
        self.items.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.values()
    }

    /// The items in insertion order, without their keys.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.values().cloned().collect()
    }

    /// One past the greatest integer key, never negative.
    fn next_index(&self) -> SigilResult<i64> {
        match self.items.keys().filter_map(Key::as_index).max() {
            None => Ok(0),
            Some(max) => max
                .checked_add(1)
                .map(|next| next.max(0))
                .ok_or_else(|| ErrorKind::IndexOverflow(max).into()),
        }
    }
}

impl<T: Typed> Set<T> {
    /// Creates a set keyed `0..n`, checking every item against the validator.
    pub fn with_validator<I>(items: I, validator: Validator<T>) -> SigilResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_entries(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (position_key(index), item)),
            validator,
        )
    }

    /// Creates a set from explicit entries, checking every item against the validator.
    ///
    /// A repeated key replaces the earlier item, keeping its position.
    pub fn from_entries<I, K>(entries: I, validator: Validator<T>) -> SigilResult<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<Key>,
    {
        let mut items = IndexMap::new();

        for (key, item) in entries {
            let key = key.into();
            check(&validator, &key, &item)?;
            items.insert(key, item);
        }

        Ok(Self { items, validator })
    }

    /// Store the item at key, returning the item it replaces.
    ///
    /// A new key is appended after the existing ones.
    pub fn insert(&mut self, key: impl Into<Key>, item: T) -> SigilResult<Option<T>> {
        let key = key.into();
        check(&self.validator, &key, &item)?;
        Ok(self.items.insert(key, item))
    }

    /// Append the item after the greatest integer key.
    pub fn push(&mut self, item: T) -> SigilResult<Key> {
        let key = Key::Index(self.next_index()?);
        self.insert(key.clone(), item)?;
        Ok(key)
    }

    /// Replace the validator, checking every current item against it first.
    ///
    /// On failure the set keeps both its items and its previous validator.
    pub fn set_validator(&mut self, validator: Validator<T>) -> SigilResult<&mut Self> {
        for (key, item) in self.items.iter() {
            if let Err(err) = check(&validator, key, item) {
                debug!("validator replacement refused: {err}");
                return Err(err);
            }
        }

        self.validator = validator;
        Ok(self)
    }
}

fn check<T: Typed>(validator: &Validator<T>, key: &Key, item: &T) -> SigilResult<()> {
    validator.validate(item).map_err(|err| {
        debug!("rejected item of type {} at key {}", item.type_name(), key);
        err.at(key.clone())
    })
}

/// An iterator over the entries of a [`Set`].
///
/// Each call to [`Set::iter`] creates an independent cursor.
pub struct Iter<'a, T>(map::Iter<'a, Key, T>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a Key, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = (&'a Key, &'a T);

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = (Key, T);

    type IntoIter = map::IntoIter<Key, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self {
            items: IndexMap::new(),
            validator: Validator::None,
        }
    }
}

impl<T: Clone> Clone for Set<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            validator: self.validator.clone(),
        }
    }
}

/// Sets are equal when they hold the same entries in the same order.
impl<T: PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T: Display> Display for Set<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut table = PtTable::new();

        table.add_row(["key", "value"].into_iter().collect());

        for (key, item) in self.iter() {
            table.add_row([key.to_string(), item.to_string()].into_iter().collect());
        }

        write!(f, "{}", table)
    }
}

impl<T: Display> Set<T> {
    /// Join the items' display forms, in order.
    pub fn join(&self, sep: &str) -> String {
        self.values().join(sep)
    }
}
