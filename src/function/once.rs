//! A function that runs at most once.
//!
//! [`Once`] wraps an `FnOnce` and remembers its result. The first call runs
//! the function; every later call returns the remembered result, whatever
//! arguments it receives.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use underbar::function::once;
//!
//! let calls = Cell::new(0);
//! let connect = once(|address: &str| {
//!     calls.set(calls.get() + 1);
//!     format!("connected to {address}")
//! });
//!
//! assert_eq!(connect.call("db-1"), "connected to db-1");
//! assert_eq!(connect.call("db-2"), "connected to db-1");
//! assert_eq!(calls.get(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;

use crate::error::UnderbarError;

/// The internal state of a [`Once`].
#[derive(Debug)]
pub enum OnceState<F, R> {
    /// Not called yet. Contains the function.
    Pending(F),
    /// Called. Contains the remembered result.
    Called(R),
    /// The function panicked. The instance is now unusable.
    Poisoned,
}

/// A function wrapper that invokes its function on the first call only.
///
/// # Thread Safety
///
/// This type is NOT thread-safe; it is meant to be owned by a single
/// execution context.
pub struct Once<F, R> {
    state: RefCell<OnceState<F, R>>,
}

static_assertions::assert_not_impl_any!(Once<fn(i32) -> i32, i32>: Sync);

/// Wraps `function` so it runs on the first call only.
///
/// See [`Once`].
#[inline]
pub const fn once<F, R>(function: F) -> Once<F, R> {
    Once::new(function)
}

impl<F, R> Once<F, R> {
    /// Creates a new wrapper around `function`.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Pending(function)),
        }
    }

    /// Returns `true` if the function has run to completion.
    pub fn is_called(&self) -> bool {
        matches!(*self.state.borrow(), OnceState::Called(_))
    }

    /// Returns `true` if the function panicked.
    pub fn is_poisoned(&self) -> bool {
        matches!(*self.state.borrow(), OnceState::Poisoned)
    }

    /// Calls the wrapped function on the first invocation and returns the
    /// remembered result on every later one.
    ///
    /// # Panics
    ///
    /// Panics if the function panicked during an earlier call, or if it
    /// calls back into this same instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::function::Once;
    ///
    /// let first = Once::new(|value: i32| value);
    /// assert_eq!(first.call(1), 1);
    /// assert_eq!(first.call(2), 1);
    /// assert_eq!(first.call(3), 1);
    /// ```
    pub fn call<A>(&self, argument: A) -> R
    where
        F: FnOnce(A) -> R,
        R: Clone,
    {
        match self.try_call(argument) {
            Ok(result) => result,
            Err(error) => panic!("{error}"),
        }
    }

    /// Like [`call`](Self::call), but reports a poisoned instance as an
    /// error instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`UnderbarError::Poisoned`] if the function panicked during
    /// an earlier call.
    pub fn try_call<A>(&self, argument: A) -> Result<R, UnderbarError>
    where
        F: FnOnce(A) -> R,
        R: Clone,
    {
        // Poisoned while the function runs, so a panic leaves it poisoned.
        match self.state.replace(OnceState::Poisoned) {
            OnceState::Pending(function) => {
                let result = function(argument);
                *self.state.borrow_mut() = OnceState::Called(result.clone());
                Ok(result)
            }
            OnceState::Called(result) => {
                let cached = result.clone();
                *self.state.borrow_mut() = OnceState::Called(result);
                Ok(cached)
            }
            OnceState::Poisoned => Err(UnderbarError::Poisoned),
        }
    }

    /// Returns the remembered result, if the function has run.
    pub fn get(&self) -> Option<R>
    where
        R: Clone,
    {
        match &*self.state.borrow() {
            OnceState::Called(result) => Some(result.clone()),
            OnceState::Pending(_) | OnceState::Poisoned => None,
        }
    }
}

impl<F, R: fmt::Debug> fmt::Debug for Once<F, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            OnceState::Pending(_) => formatter.write_str("Once(<pending>)"),
            OnceState::Called(result) => formatter.debug_tuple("Once").field(result).finish(),
            OnceState::Poisoned => formatter.write_str("Once(<poisoned>)"),
        }
    }
}
