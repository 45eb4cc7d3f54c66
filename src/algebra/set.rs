//! Set algebra by equality: `intersection` and `difference`.
//!
//! Both keep the order and multiplicity of their first sequence.

use crate::collection::contains;

/// Returns the elements of the first sequence that occur in every other
/// sequence.
///
/// A single sequence intersects to a copy of itself; an empty list of
/// sequences intersects to nothing.
///
/// # Examples
///
/// ```rust
/// use underbar::algebra::intersection;
///
/// let shared = intersection(&[&[1, 2, 3][..], &[2, 3, 4][..], &[3, 4, 5][..]]);
/// assert_eq!(shared, vec![3]);
/// ```
pub fn intersection<T>(sequences: &[&[T]]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    let Some((first, others)) = sequences.split_first() else {
        return Vec::new();
    };
    first
        .iter()
        .filter(|element| others.iter().all(|other| contains(*other, *element)))
        .cloned()
        .collect()
}

/// Returns the elements of `first` that occur in none of `others`.
///
/// # Examples
///
/// ```rust
/// use underbar::algebra::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4], &[&[2, 4][..]]), vec![1, 3]);
/// assert_eq!(difference(&[1, 2, 3], &[]), vec![1, 2, 3]);
/// ```
pub fn difference<T>(first: &[T], others: &[&[T]]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    first
        .iter()
        .filter(|element| !others.iter().any(|other| contains(*other, *element)))
        .cloned()
        .collect()
}
