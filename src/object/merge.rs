//! Shallow merges: `extend` and `defaults`.

use crate::collection::Mapping;

/// Copies every entry of every source into `target`, in order.
///
/// Later sources overwrite earlier ones and any key already in `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Mapping;
/// use underbar::object::extend;
///
/// let mut target = Mapping::from([("key1".to_string(), 1)]);
/// let first = Mapping::from([("key2".to_string(), 2), ("key3".to_string(), 3)]);
/// let second = Mapping::from([("key3".to_string(), 30)]);
///
/// let merged = extend(&mut target, &[&first, &second]);
/// assert_eq!(merged.len(), 3);
/// assert_eq!(merged["key3"], 30);
/// ```
pub fn extend<'t, V: Clone>(
    target: &'t mut Mapping<V>,
    sources: &[&Mapping<V>],
) -> &'t mut Mapping<V> {
    for source in sources {
        for (key, value) in *source {
            target.insert(key.clone(), value.clone());
        }
    }
    target
}

/// Copies entries of every source into `target` without overwriting.
///
/// A key is only filled in if `target` does not have it yet, including keys
/// filled in by an earlier source of the same call.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Mapping;
/// use underbar::object::defaults;
///
/// let mut target = Mapping::from([("a".to_string(), 1)]);
/// let first = Mapping::from([("a".to_string(), 10), ("b".to_string(), 2)]);
/// let second = Mapping::from([("b".to_string(), 20), ("c".to_string(), 3)]);
///
/// defaults(&mut target, &[&first, &second]);
/// assert_eq!(target["a"], 1);
/// assert_eq!(target["b"], 2);
/// assert_eq!(target["c"], 3);
/// ```
pub fn defaults<'t, V: Clone>(
    target: &'t mut Mapping<V>,
    sources: &[&Mapping<V>],
) -> &'t mut Mapping<V> {
    for source in sources {
        for (key, value) in *source {
            target
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }
    target
}
