//! Operations over sequences and key-value mappings.
//!
//! This module provides the iteration primitives and the operations
//! derived from them:
//!
//! - **Iteration**: [`each`], [`map`], [`reduce`], [`fold`]
//! - **Predicates**: [`filter`], [`reject`], [`uniq`], [`contains`],
//!   [`every`], [`some`], [`index_of`]
//! - **Projections**: [`first`], [`last`], [`pluck`], [`invoke`],
//!   [`invoke_method`]
//!
//! # Sequences and Mappings
//!
//! Operations that accept either shape take anything implementing
//! [`IntoCollection`]: slices, `Vec`s, arrays, and [`Mapping`]s. The shape is
//! resolved at the call site into a [`Collection`] variant. Operations that
//! only make sense for sequences take `&[T]` directly, so handing them a
//! mapping is a compile error.
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::{Key, Mapping, each};
//!
//! let mut ages = Mapping::new();
//! ages.insert("alice".to_string(), 31);
//! ages.insert("bob".to_string(), 27);
//!
//! let mut seen = Vec::new();
//! each(&ages, |age, key, _| seen.push((key.to_string(), *age)));
//! assert_eq!(seen, vec![("alice".to_string(), 31), ("bob".to_string(), 27)]);
//!
//! let mut indices = Vec::new();
//! each(&[10, 20], |_, key, _| indices.push(key));
//! assert_eq!(indices, vec![Key::Index(0), Key::Index(1)]);
//! ```

mod iteration;
mod predicate;
mod projection;
mod truthy;

pub use iteration::{each, fold, map, reduce};
pub use predicate::{
    contains, every, every_truthy, filter, index_of, reject, some, some_truthy, uniq,
};
pub use projection::{
    Invocable, Record, first, first_n, invoke, invoke_method, last, last_n, pluck,
};
pub use truthy::Truthy;

use std::collections::{BTreeMap, btree_map};
use std::fmt;
use std::slice;

/// A string-keyed mapping.
///
/// Enumeration order is ascending key order, so it is stable across passes.
pub type Mapping<V> = BTreeMap<String, V>;

/// The position of an element inside a [`Collection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Zero-based index into a sequence.
    Index(usize),
    /// Key of a mapping entry.
    Name(&'a str),
}

impl<'a> Key<'a> {
    /// Returns the index if this key addresses a sequence element.
    #[inline]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }

    /// Returns the name if this key addresses a mapping entry.
    #[inline]
    pub const fn name(&self) -> Option<&'a str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(*name),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => write!(formatter, "{name}"),
        }
    }
}

/// A borrowed view of either an ordered sequence or a string-keyed mapping.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{Collection, IntoCollection};
///
/// let values = vec![1, 2, 3];
/// let collection = (&values).into_collection();
/// assert!(matches!(collection, Collection::Sequence(_)));
/// assert_eq!(collection.len(), 3);
/// ```
#[derive(Debug)]
pub enum Collection<'a, V> {
    /// An integer-indexed sequence.
    Sequence(&'a [V]),
    /// A mapping from string keys to values.
    Mapping(&'a Mapping<V>),
}

// Manual impls: a derive would require `V: Clone`.
impl<V> Clone for Collection<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Collection<'_, V> {}

impl<'a, V> Collection<'a, V> {
    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(sequence) => sequence.len(),
            Self::Mapping(mapping) => mapping.len(),
        }
    }

    /// Returns `true` if the collection has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the values in enumeration order.
    pub fn values(&self) -> Values<'a, V> {
        match *self {
            Self::Sequence(sequence) => Values::Sequence(sequence.iter()),
            Self::Mapping(mapping) => Values::Mapping(mapping.values()),
        }
    }

    /// Iterates over `(key, value)` pairs in enumeration order.
    pub fn entries(&self) -> Entries<'a, V> {
        match *self {
            Self::Sequence(sequence) => Entries::Sequence(sequence.iter().enumerate()),
            Self::Mapping(mapping) => Entries::Mapping(mapping.iter()),
        }
    }
}

/// Iterator over the values of a [`Collection`].
#[derive(Debug)]
pub enum Values<'a, V> {
    #[doc(hidden)]
    Sequence(slice::Iter<'a, V>),
    #[doc(hidden)]
    Mapping(btree_map::Values<'a, String, V>),
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Sequence(iterator) => iterator.next(),
            Self::Mapping(iterator) => iterator.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Sequence(iterator) => iterator.size_hint(),
            Self::Mapping(iterator) => iterator.size_hint(),
        }
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}

/// Iterator over the `(key, value)` pairs of a [`Collection`].
#[derive(Debug)]
pub enum Entries<'a, V> {
    #[doc(hidden)]
    Sequence(std::iter::Enumerate<slice::Iter<'a, V>>),
    #[doc(hidden)]
    Mapping(btree_map::Iter<'a, String, V>),
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = (Key<'a>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Sequence(iterator) => iterator
                .next()
                .map(|(index, value)| (Key::Index(index), value)),
            Self::Mapping(iterator) => iterator
                .next()
                .map(|(name, value)| (Key::Name(name.as_str()), value)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Sequence(iterator) => iterator.size_hint(),
            Self::Mapping(iterator) => iterator.size_hint(),
        }
    }
}

impl<V> ExactSizeIterator for Entries<'_, V> {}

/// Conversion into a borrowed [`Collection`].
///
/// The element type is an associated type so the value type of every
/// operation is determined by its argument alone.
pub trait IntoCollection<'a> {
    /// The element type of the collection.
    type Value: 'a;

    /// Performs the conversion.
    fn into_collection(self) -> Collection<'a, Self::Value>;
}

impl<'a, V> IntoCollection<'a> for Collection<'a, V> {
    type Value = V;

    #[inline]
    fn into_collection(self) -> Collection<'a, V> {
        self
    }
}

impl<'a, V> IntoCollection<'a> for &'a [V] {
    type Value = V;

    #[inline]
    fn into_collection(self) -> Collection<'a, V> {
        Collection::Sequence(self)
    }
}

impl<'a, V, const N: usize> IntoCollection<'a> for &'a [V; N] {
    type Value = V;

    #[inline]
    fn into_collection(self) -> Collection<'a, V> {
        Collection::Sequence(self.as_slice())
    }
}

impl<'a, V> IntoCollection<'a> for &'a Vec<V> {
    type Value = V;

    #[inline]
    fn into_collection(self) -> Collection<'a, V> {
        Collection::Sequence(self.as_slice())
    }
}

impl<'a, V> IntoCollection<'a> for &'a Mapping<V> {
    type Value = V;

    #[inline]
    fn into_collection(self) -> Collection<'a, V> {
        Collection::Mapping(self)
    }
}
