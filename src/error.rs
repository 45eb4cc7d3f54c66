//! Error types shared by every module.
//!
//! Most operations are total: they are defined over empty input and return
//! an empty or neutral result. The few that are not surface an
//! [`UnderbarError`].

use std::fmt;

/// Returned by `invoke_method` when an element does not provide the
/// requested method.
///
/// # Examples
///
/// ```rust
/// use underbar::error::UnknownMethodError;
///
/// let error = UnknownMethodError::new("toUpperCase");
/// assert_eq!(format!("{error}"), "unknown method `toUpperCase`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethodError {
    /// The method name that could not be resolved.
    pub method: String,
}

impl UnknownMethodError {
    /// Creates an error for the given method name.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
        }
    }
}

impl fmt::Display for UnknownMethodError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "unknown method `{}`", self.method)
    }
}

impl std::error::Error for UnknownMethodError {}

/// Errors produced by the library.
///
/// # Examples
///
/// ```rust
/// use underbar::UnderbarError;
///
/// let error = UnderbarError::EmptyReduce;
/// assert_eq!(
///     format!("{error}"),
///     "reduce of empty collection with no initial value"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnderbarError {
    /// `reduce` was called on an empty collection without an initial value,
    /// so there is no first element to start from.
    EmptyReduce,
    /// `invoke_method` named a method the element does not provide.
    UnknownMethod(UnknownMethodError),
    /// A timer-based decorator was used outside of a Tokio runtime.
    NoRuntime,
    /// A `once` decorator is unusable because its function panicked.
    Poisoned,
}

impl fmt::Display for UnderbarError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyReduce => write!(
                formatter,
                "reduce of empty collection with no initial value"
            ),
            Self::UnknownMethod(error) => write!(formatter, "{error}"),
            Self::NoRuntime => write!(
                formatter,
                "no timer available: call from within a Tokio runtime"
            ),
            Self::Poisoned => write!(formatter, "Once instance has been poisoned"),
        }
    }
}

impl std::error::Error for UnderbarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnknownMethod(error) => Some(error),
            _ => None,
        }
    }
}

impl From<UnknownMethodError> for UnderbarError {
    fn from(error: UnknownMethodError) -> Self {
        Self::UnknownMethod(error)
    }
}
