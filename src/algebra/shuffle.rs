//! Random permutation of a sequence.

use rand::Rng;

/// Returns a uniformly shuffled copy of `sequence` using the thread-local
/// random number generator.
///
/// # Examples
///
/// ```rust
/// use underbar::algebra::shuffle;
///
/// let original = vec![1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&original);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, original);
/// ```
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::rng())
}

/// Returns a shuffled copy of `sequence` drawing randomness from `rng`.
///
/// Runs the Fisher–Yates algorithm on a copy, so the same seeded generator
/// always produces the same permutation.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use underbar::algebra::shuffle_with;
///
/// let values = [1, 2, 3, 4, 5, 6];
/// let first = shuffle_with(&values, &mut StdRng::seed_from_u64(7));
/// let second = shuffle_with(&values, &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
pub fn shuffle_with<T, R>(sequence: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = sequence.to_vec();
    for index in (1..shuffled.len()).rev() {
        let other = rng.random_range(0..=index);
        shuffled.swap(index, other);
    }
    shuffled
}
