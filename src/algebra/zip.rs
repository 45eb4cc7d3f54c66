//! Positional grouping of several sequences.

/// Groups the elements of several sequences by position.
///
/// Tuple `i` holds element `i` of every input, in input order. The result
/// is as long as the longest input; shorter inputs contribute `None` past
/// their end.
///
/// # Examples
///
/// ```rust
/// use underbar::algebra::zip;
///
/// let zipped = zip(&[&[1, 2, 3][..], &[4, 5][..]]);
/// assert_eq!(
///     zipped,
///     vec![
///         vec![Some(1), Some(4)],
///         vec![Some(2), Some(5)],
///         vec![Some(3), None],
///     ]
/// );
/// ```
pub fn zip<T: Clone>(sequences: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let length = sequences
        .iter()
        .map(|sequence| sequence.len())
        .max()
        .unwrap_or(0);
    (0..length)
        .map(|index| {
            sequences
                .iter()
                .map(|sequence| sequence.get(index).cloned())
                .collect()
        })
        .collect()
}

/// Pairs up two sequences of possibly different element types.
///
/// Same padding rule as [`zip`].
///
/// # Examples
///
/// ```rust
/// use underbar::algebra::zip2;
///
/// let pairs = zip2(&['a', 'b', 'c', 'd'], &[1, 2, 3]);
/// assert_eq!(pairs.len(), 4);
/// assert_eq!(pairs[0], (Some('a'), Some(1)));
/// assert_eq!(pairs[3], (Some('d'), None));
/// ```
pub fn zip2<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(Option<A>, Option<B>)> {
    let length = left.len().max(right.len());
    (0..length)
        .map(|index| (left.get(index).cloned(), right.get(index).cloned()))
        .collect()
}
