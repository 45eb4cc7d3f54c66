//! Stable sorting by a derived key.

use std::cmp::Ordering;

use crate::collection::{IntoCollection, Record};

/// Orders keys ascending. Keys that are not comparable with themselves
/// (such as `NaN`) are equal to each other and sort after every other key,
/// which keeps the ordering total.
fn compare_keys<K: PartialOrd + ?Sized>(left: &K, right: &K) -> Ordering {
    left.partial_cmp(right).unwrap_or_else(|| {
        let left_comparable = left.partial_cmp(left).is_some();
        let right_comparable = right.partial_cmp(right).is_some();
        right_comparable.cmp(&left_comparable)
    })
}

/// Sorts the values of a collection ascending by `key_function`.
///
/// The sort is stable: elements with equal keys keep their original
/// relative order, and none are dropped. Mappings are sorted by their
/// values in key order.
///
/// # Examples
///
/// ```rust
/// use underbar::algebra::sort_by;
///
/// let words = ["pear", "fig", "banana", "kiwi"];
/// assert_eq!(
///     sort_by(&words, |word| word.len()),
///     vec!["fig", "pear", "kiwi", "banana"]
/// );
/// ```
pub fn sort_by<'a, C, K, F>(collection: C, mut key_function: F) -> Vec<C::Value>
where
    C: IntoCollection<'a>,
    C::Value: Clone,
    K: PartialOrd,
    F: FnMut(&C::Value) -> K,
{
    let mut keyed: Vec<(K, &'a C::Value)> = collection
        .into_collection()
        .values()
        .map(|value| (key_function(value), value))
        .collect();
    keyed.sort_by(|(left, _), (right, _)| compare_keys(left, right));
    keyed.into_iter().map(|(_, value)| value.clone()).collect()
}

/// Sorts records ascending by the named property.
///
/// Stable like [`sort_by`]. Records that lack the property sort last.
///
/// # Examples
///
/// ```rust
/// use underbar::algebra::sort_by_property;
/// use underbar::collection::Mapping;
///
/// let records: Vec<Mapping<i32>> = [3, 1, 2]
///     .into_iter()
///     .map(|a| Mapping::from([("a".to_string(), a)]))
///     .collect();
/// let sorted = sort_by_property(&records, "a");
/// let keys: Vec<i32> = sorted.iter().map(|record| record["a"]).collect();
/// assert_eq!(keys, vec![1, 2, 3]);
/// ```
pub fn sort_by_property<R>(sequence: &[R], property: &str) -> Vec<R>
where
    R: Record + Clone,
    R::Value: PartialOrd,
{
    let mut keyed: Vec<(Option<&R::Value>, &R)> = sequence
        .iter()
        .map(|record| (record.property(property), record))
        .collect();
    keyed.sort_by(|(left, _), (right, _)| match (left, right) {
        (Some(left), Some(right)) => compare_keys(*left, *right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    keyed.into_iter().map(|(_, record)| record.clone()).collect()
}
