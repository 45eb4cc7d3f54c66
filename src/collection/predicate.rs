//! Predicate-based operations.
//!
//! Predicates may return any [`Truthy`] value. Equality tests use
//! [`PartialEq`].

use super::iteration::fold;
use super::{IntoCollection, Truthy};

/// Returns the elements for which `predicate` is truthy, in their original
/// order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::filter;
///
/// let evens = filter(&[1, 2, 3, 4, 5, 6], |number| number % 2 == 0);
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn filter<T, P, F>(sequence: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    P: Truthy,
    F: FnMut(&T) -> P,
{
    sequence
        .iter()
        .filter(|element| predicate(*element).is_truthy())
        .cloned()
        .collect()
}

/// Returns the elements for which `predicate` is falsy, in their original
/// order.
///
/// Computed as the sequence minus the result of [`filter`]: each accepted
/// element removes exactly one equal occurrence, earliest first. When
/// `PartialEq` is reflexive, `filter` and `reject` partition the input.
/// An element that is not equal to itself, such as `f64::NAN`, is never
/// removed, so it can appear in both results.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reject;
///
/// let odds = reject(&[1, 2, 3, 4, 5, 6], |number| number % 2 == 0);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn reject<T, P, F>(sequence: &[T], predicate: F) -> Vec<T>
where
    T: Clone + PartialEq,
    P: Truthy,
    F: FnMut(&T) -> P,
{
    let accepted = filter(sequence, predicate);
    let mut consumed = vec![false; accepted.len()];
    let mut rejected = Vec::with_capacity(sequence.len() - accepted.len());

    for element in sequence {
        let matching = accepted
            .iter()
            .zip(consumed.iter_mut())
            .find(|(candidate, used)| !**used && *candidate == element);
        match matching {
            Some((_, used)) => *used = true,
            None => rejected.push(element.clone()),
        }
    }
    rejected
}

/// Removes duplicates, keeping the first occurrence of each value.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::uniq;
///
/// assert_eq!(uniq(&[1, 2, 1, 3, 2]), vec![1, 2, 3]);
/// assert!(uniq::<i32>(&[]).is_empty());
/// ```
pub fn uniq<T>(sequence: &[T]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    let mut unique: Vec<T> = Vec::new();
    for element in sequence {
        if !unique.contains(element) {
            unique.push(element.clone());
        }
    }
    unique
}

/// Returns `true` if any element equals `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::contains;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&[1, 2, 3], &4));
/// ```
pub fn contains<'a, C>(collection: C, target: &C::Value) -> bool
where
    C: IntoCollection<'a>,
    C::Value: PartialEq,
{
    fold(collection, false, |was_found, item| was_found || item == target)
}

/// Returns `true` if `predicate` is truthy for every element.
///
/// An empty collection satisfies every predicate.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every;
///
/// assert!(every(&[2, 4, 6], |number| number % 2 == 0));
/// assert!(!every(&[2, 3], |number| number % 2 == 0));
/// assert!(every(&[] as &[i32], |_| false));
/// ```
pub fn every<'a, C, P, F>(collection: C, mut predicate: F) -> bool
where
    C: IntoCollection<'a>,
    P: Truthy,
    F: FnMut(&'a C::Value) -> P,
{
    collection
        .into_collection()
        .values()
        .all(|value| predicate(value).is_truthy())
}

/// [`every`] with the identity predicate: `true` if every element is
/// itself truthy.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every_truthy;
///
/// assert!(every_truthy(&[1, 2, 3]));
/// assert!(!every_truthy(&[1, 0, 3]));
/// ```
pub fn every_truthy<'a, C>(collection: C) -> bool
where
    C: IntoCollection<'a>,
    C::Value: Truthy,
{
    every(collection, |value| value.is_truthy())
}

/// Returns `true` if `predicate` is truthy for at least one element.
///
/// An empty collection satisfies no predicate.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::some;
///
/// assert!(some(&[1, 3, 4], |number| number % 2 == 0));
/// assert!(!some(&[1, 3, 5], |number| number % 2 == 0));
/// ```
pub fn some<'a, C, P, F>(collection: C, mut predicate: F) -> bool
where
    C: IntoCollection<'a>,
    P: Truthy,
    F: FnMut(&'a C::Value) -> P,
{
    collection
        .into_collection()
        .values()
        .any(|value| predicate(value).is_truthy())
}

/// [`some`] with the identity predicate: `true` if any element is itself
/// truthy.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::some_truthy;
///
/// assert!(some_truthy(&["", "x"]));
/// assert!(!some_truthy(&[0, 0]));
/// ```
pub fn some_truthy<'a, C>(collection: C) -> bool
where
    C: IntoCollection<'a>,
    C::Value: Truthy,
{
    some(collection, |value| value.is_truthy())
}

/// Returns the index of the first element equal to `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::index_of;
///
/// assert_eq!(index_of(&[10, 20, 30, 20], &20), Some(1));
/// assert_eq!(index_of(&[10, 20], &99), None);
/// ```
pub fn index_of<T>(sequence: &[T], target: &T) -> Option<usize>
where
    T: PartialEq,
{
    sequence.iter().position(|element| element == target)
}
