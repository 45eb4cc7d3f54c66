//! Projections: `first`, `last`, `pluck`, and `invoke`.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use super::iteration::map;
use crate::error::{UnderbarError, UnknownMethodError};

/// Returns the first element, or `None` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub const fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns the first `count` elements, or the whole sequence when `count`
/// exceeds its length.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 10), &[1, 2, 3]);
/// ```
#[inline]
pub fn first_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[..count.min(sequence.len())]
}

/// Returns the last element, or `None` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::last;
///
/// assert_eq!(last(&[1, 2, 3]), Some(&3));
/// ```
#[inline]
pub const fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns the last `count` elements, or the whole sequence when `count`
/// exceeds its length.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), &[2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// assert!(last_n(&[1, 2, 3], 0).is_empty());
/// ```
#[inline]
pub fn last_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[sequence.len().saturating_sub(count)..]
}

/// A value with named properties.
///
/// Implemented for string-keyed maps; implement it for your own record
/// types to use them with [`pluck`] and
/// [`sort_by_property`](crate::algebra::sort_by_property).
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Record;
///
/// struct Person {
///     name: String,
/// }
///
/// impl Record for Person {
///     type Value = String;
///
///     fn property(&self, name: &str) -> Option<&String> {
///         match name {
///             "name" => Some(&self.name),
///             _ => None,
///         }
///     }
/// }
///
/// let person = Person { name: "Ada".to_string() };
/// assert_eq!(person.property("name").map(String::as_str), Some("Ada"));
/// assert_eq!(person.property("age"), None);
/// ```
pub trait Record {
    /// The type of every property value.
    type Value;

    /// Looks up a property by name.
    fn property(&self, name: &str) -> Option<&Self::Value>;
}

impl<V> Record for BTreeMap<String, V> {
    type Value = V;

    #[inline]
    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V, S: BuildHasher> Record for HashMap<String, V, S> {
    type Value = V;

    #[inline]
    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

/// Extracts one property from every record.
///
/// Records without the property yield `None`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::{Mapping, pluck};
///
/// let people: Vec<Mapping<u32>> = vec![
///     Mapping::from([("age".to_string(), 31)]),
///     Mapping::from([("height".to_string(), 180)]),
/// ];
/// assert_eq!(pluck(&people, "age"), vec![Some(31), None]);
/// ```
pub fn pluck<R>(sequence: &[R], property: &str) -> Vec<Option<R::Value>>
where
    R: Record,
    R::Value: Clone,
{
    map(sequence, |record| record.property(property).cloned())
}

/// A value that exposes methods callable by name.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Invocable;
///
/// let word = "abc".to_string();
/// assert_eq!(word.invoke_method("to_uppercase", &[]).unwrap(), "ABC");
/// assert!(word.invoke_method("explode", &[]).is_err());
/// ```
pub trait Invocable {
    /// The argument type accepted by the methods.
    type Argument;
    /// The result type returned by the methods.
    type Output;

    /// Calls the method `name` with `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownMethodError`] if `name` is not a method of `self`.
    fn invoke_method(
        &self,
        name: &str,
        arguments: &[Self::Argument],
    ) -> Result<Self::Output, UnknownMethodError>;
}

/// String methods available through [`invoke_method`]:
/// `to_uppercase`, `to_lowercase`, `trim`, `reverse`, and `concat`
/// (appends every argument).
impl Invocable for String {
    type Argument = String;
    type Output = String;

    fn invoke_method(
        &self,
        name: &str,
        arguments: &[String],
    ) -> Result<String, UnknownMethodError> {
        match name {
            "to_uppercase" => Ok(self.to_uppercase()),
            "to_lowercase" => Ok(self.to_lowercase()),
            "trim" => Ok(self.trim().to_string()),
            "reverse" => Ok(self.chars().rev().collect()),
            "concat" => Ok(arguments.iter().fold(self.clone(), |mut joined, argument| {
                joined.push_str(argument);
                joined
            })),
            _ => Err(UnknownMethodError::new(name)),
        }
    }
}

/// Calls `function(element, sequence)` for every element and collects the
/// results.
///
/// The whole sequence is passed as the second argument of every call,
/// rather than any per-element argument list.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::invoke;
///
/// let shares = invoke(&[1, 3], |value, all| value * 100 / all.iter().sum::<i32>());
/// assert_eq!(shares, vec![25, 75]);
/// ```
pub fn invoke<T, R, F>(sequence: &[T], mut function: F) -> Vec<R>
where
    F: FnMut(&T, &[T]) -> R,
{
    sequence
        .iter()
        .map(|element| function(element, sequence))
        .collect()
}

/// Calls the method `name` on every element with `arguments` and collects
/// the results.
///
/// # Errors
///
/// Returns [`UnderbarError::UnknownMethod`] for the first element that does
/// not provide the method.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::invoke_method;
///
/// let words = vec!["dog".to_string(), "cat".to_string()];
/// let shouted = invoke_method(&words, "to_uppercase", &[]).unwrap();
/// assert_eq!(shouted, vec!["DOG", "CAT"]);
/// ```
pub fn invoke_method<T>(
    sequence: &[T],
    name: &str,
    arguments: &[T::Argument],
) -> Result<Vec<T::Output>, UnderbarError>
where
    T: Invocable,
{
    sequence
        .iter()
        .map(|element| {
            element
                .invoke_method(name, arguments)
                .map_err(UnderbarError::from)
        })
        .collect()
}
