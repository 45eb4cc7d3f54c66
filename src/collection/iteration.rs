//! Iteration primitives: `each`, `map`, `reduce`, and `fold`.
//!
//! Every other collection operation can be expressed in terms of these.

use super::{Collection, IntoCollection, Key};
use crate::error::UnderbarError;

/// Calls `iterator(value, key, collection)` once for each element.
///
/// Sequences are visited in ascending index order and mappings in ascending
/// key order. The collection itself is passed as the third argument so the
/// iterator can look at neighbouring elements.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::each;
///
/// let mut total = 0;
/// each(&[1, 2, 3], |value, _, _| total += value);
/// assert_eq!(total, 6);
/// ```
pub fn each<'a, C, F>(collection: C, mut iterator: F)
where
    C: IntoCollection<'a>,
    F: FnMut(&'a C::Value, Key<'a>, &Collection<'a, C::Value>),
{
    let collection = collection.into_collection();
    for (key, value) in collection.entries() {
        iterator(value, key, &collection);
    }
}

/// Produces a new sequence where element `i` is `iterator(&sequence[i])`.
///
/// Only sequences can be mapped; the input is left untouched.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::map;
///
/// let doubled = map(&[1, 2, 3], |number| number * 2);
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
pub fn map<T, R, F>(sequence: &[T], iterator: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    sequence.iter().map(iterator).collect()
}

/// Folds the collection left to right into a single value of the element
/// type.
///
/// With `initial` set to `None` the first element becomes the accumulator
/// and folding starts from the second element. `Some(value)` is always used
/// as given, even when it is a falsy value such as `Some(0)`.
///
/// # Errors
///
/// Returns [`UnderbarError::EmptyReduce`] when the collection is empty and
/// no initial value was supplied.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce;
/// use underbar::UnderbarError;
///
/// let numbers = [1, 2, 3];
/// assert_eq!(reduce(&numbers, |total, number| total + number, Some(0)), Ok(6));
/// assert_eq!(reduce(&numbers, |total, number| total + number, None), Ok(6));
///
/// let empty: [i32; 0] = [];
/// assert_eq!(
///     reduce(&empty, |total, number| total + number, None),
///     Err(UnderbarError::EmptyReduce)
/// );
/// ```
pub fn reduce<'a, C, F>(
    collection: C,
    iterator: F,
    initial: Option<C::Value>,
) -> Result<C::Value, UnderbarError>
where
    C: IntoCollection<'a>,
    C::Value: Clone,
    F: FnMut(C::Value, &'a C::Value) -> C::Value,
{
    let mut values = collection.into_collection().values();
    let accumulator = match initial {
        Some(initial) => initial,
        None => values.next().cloned().ok_or(UnderbarError::EmptyReduce)?,
    };
    Ok(values.fold(accumulator, iterator))
}

/// Folds the collection left to right starting from an explicit initial
/// value whose type may differ from the element type.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::fold;
///
/// let words = ["a", "bb", "ccc"];
/// let total_length = fold(&words, 0, |length, word| length + word.len());
/// assert_eq!(total_length, 6);
/// ```
pub fn fold<'a, C, B, F>(collection: C, initial: B, iterator: F) -> B
where
    C: IntoCollection<'a>,
    F: FnMut(B, &'a C::Value) -> B,
{
    collection.into_collection().values().fold(initial, iterator)
}
