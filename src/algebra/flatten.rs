//! Arbitrarily nested sequences and their flattening.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value or a sequence of further nested values.
///
/// Build literals with the [`nested!`](crate::nested) macro.
///
/// # Examples
///
/// ```rust
/// use underbar::algebra::Nested;
/// use underbar::nested;
///
/// let literal = nested![1, [2, 3]];
/// assert_eq!(
///     literal,
///     vec![
///         Nested::Leaf(1),
///         Nested::List(vec![Nested::Leaf(2), Nested::Leaf(3)]),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    /// A plain element.
    Leaf(T),
    /// A nested sequence.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Returns `true` for [`Nested::Leaf`].
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns the maximum nesting depth; a leaf has depth 0.
    ///
    /// Walks the nesting with an explicit stack, so any depth is supported.
    pub fn depth(&self) -> usize {
        let Self::List(children) = self else {
            return 0;
        };
        let mut deepest = 1;
        let mut pending = vec![(children.iter(), 1)];

        while let Some((top, level)) = pending.last_mut() {
            let level = *level;
            match top.next() {
                Some(Self::List(children)) => {
                    deepest = deepest.max(level + 1);
                    pending.push((children.iter(), level + 1));
                }
                Some(Self::Leaf(_)) => {}
                None => {
                    pending.pop();
                }
            }
        }
        deepest
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Self::Leaf(value)
    }
}

/// Builds a `Vec<Nested<_>>` from a bracketed literal.
///
/// Leaves must be single tokens (literals or identifiers); wrap anything
/// longer in parentheses.
///
/// # Examples
///
/// ```rust
/// use underbar::nested;
/// use underbar::algebra::flatten;
///
/// let offset = 10;
/// let values = nested![1, [offset, [(offset + 1)]]];
/// assert_eq!(flatten(&values), vec![1, 10, 11]);
/// ```
#[macro_export]
macro_rules! nested {
    (@item [$($inner:tt)*]) => {
        $crate::algebra::Nested::List($crate::nested![$($inner)*])
    };
    (@item $leaf:tt) => {
        $crate::algebra::Nested::Leaf($leaf)
    };
    ($($item:tt),* $(,)?) => {
        vec![$($crate::nested!(@item $item)),*]
    };
}

/// Flattens arbitrarily nested sequences into one sequence, left to right.
///
/// Depth is unbounded: nesting is walked with an explicit stack rather than
/// recursion.
///
/// # Examples
///
/// ```rust
/// use underbar::algebra::flatten;
/// use underbar::nested;
///
/// assert_eq!(flatten(&nested![1, [2], [3, [[4]]]]), vec![1, 2, 3, 4]);
/// assert!(flatten::<i32>(&nested![[], [[]]]).is_empty());
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    let mut flattened = Vec::new();
    let mut pending = vec![nested.iter()];

    while let Some(top) = pending.last_mut() {
        match top.next() {
            Some(Nested::Leaf(value)) => flattened.push(value.clone()),
            Some(Nested::List(children)) => pending.push(children.iter()),
            None => {
                pending.pop();
            }
        }
    }
    flattened
}
