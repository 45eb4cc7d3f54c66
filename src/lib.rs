//! # underbar
//!
//! A small functional-programming utility library providing generic
//! operations over sequences and key-value mappings, plus a handful of
//! function decorators.
//!
//! ## Overview
//!
//! - **Collections**: `each`, `map`, `reduce`, `filter`, `reject`, `uniq`,
//!   `contains`, `every`, `some`, `first`, `last`, `pluck`, `invoke`
//! - **Array Algebra**: `sort_by`, `zip`, `flatten`, `intersection`,
//!   `difference`, `shuffle`
//! - **Function Decorators**: `once`, `memoize`, `delay`, `throttle`
//! - **Object Merging**: `extend`, `defaults`
//!
//! ## Feature Flags
//!
//! - `collection`: Iteration primitives, predicates and projections
//! - `algebra`: Whole-sequence operations (sorting, zipping, set algebra)
//! - `function`: Synchronous decorators (`once`, `memoize`)
//! - `async`: Timer-based decorators (`delay`, `throttle`) on Tokio
//! - `object`: Shallow mapping merges
//! - `serde`: `Serialize`/`Deserialize` for [`algebra::Nested`] and
//!   [`function::ThrottlePolicy`]
//! - `fxhash` / `ahash`: Faster hashers for the `memoize` cache
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let numbers = vec![1, 2, 1, 3, 2];
//! assert_eq!(uniq(&numbers), vec![1, 2, 3]);
//!
//! let sum = reduce(&numbers, |total, number| total + number, None).unwrap();
//! assert_eq!(sum, 9);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every operation of the enabled modules.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "algebra")]
    pub use crate::algebra::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "object")]
    pub use crate::object::*;
}

pub mod error;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "algebra")]
pub mod algebra;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "object")]
pub mod object;

pub use error::UnderbarError;
