//! Result caching keyed by argument.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

#[cfg(feature = "fxhash")]
type DefaultBuildHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type DefaultBuildHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type DefaultBuildHasher = std::collections::hash_map::RandomState;

/// A function wrapper that caches results by argument.
///
/// The argument itself is the cache key, so it must be `Hash + Eq`. Use a
/// tuple for functions of several arguments.
///
/// With the `fxhash` or `ahash` feature the cache uses the corresponding
/// faster hasher.
///
/// # Thread Safety
///
/// This type is NOT thread-safe; it is meant to be owned by a single
/// execution context.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use underbar::function::memoize;
///
/// let calls = Cell::new(0);
/// let slow_square = memoize(|number: u64| {
///     calls.set(calls.get() + 1);
///     number * number
/// });
///
/// assert_eq!(slow_square.call(9), 81);
/// assert_eq!(slow_square.call(9), 81);
/// assert_eq!(calls.get(), 1);
/// ```
pub struct Memoized<F, A, R, S = DefaultBuildHasher> {
    function: F,
    cache: RefCell<HashMap<A, R, S>>,
}

static_assertions::assert_not_impl_any!(Memoized<fn(i32) -> i32, i32, i32>: Sync);

/// Wraps `function` so results are cached by argument.
///
/// See [`Memoized`].
#[inline]
pub fn memoize<F, A, R>(function: F) -> Memoized<F, A, R>
where
    F: Fn(A) -> R,
{
    Memoized::new(function)
}

impl<F, A, R, S> Memoized<F, A, R, S>
where
    F: Fn(A) -> R,
    S: BuildHasher + Default,
{
    /// Creates a new wrapper around `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(HashMap::default()),
        }
    }

    /// Returns the cached result for `argument`, calling the function only
    /// if the argument has not been seen before.
    pub fn call(&self, argument: A) -> R
    where
        A: Hash + Eq + Clone,
        R: Clone,
    {
        if let Some(cached) = self.cache.borrow().get(&argument) {
            return cached.clone();
        }
        let result = (self.function)(argument.clone());
        self.cache.borrow_mut().insert(argument, result.clone());
        result
    }

    /// Returns `true` if a result for `argument` is cached.
    pub fn is_cached(&self, argument: &A) -> bool
    where
        A: Hash + Eq,
    {
        self.cache.borrow().contains_key(argument)
    }

    /// Returns the number of cached results.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Drops every cached result.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl<F, A, R, S> fmt::Debug for Memoized<F, A, R, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("cached", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}
