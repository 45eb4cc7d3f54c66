//! Operations over whole sequences.
//!
//! Unlike the element-wise operations in [`collection`](crate::collection),
//! these look at one or more complete sequences at once:
//!
//! - [`sort_by`] / [`sort_by_property`]: Stable sorting by a derived key
//! - [`zip`] / [`zip2`]: Positional grouping, padded with `None`
//! - [`flatten`]: Depth-unbounded flattening of [`Nested`] sequences
//! - [`intersection`] / [`difference`]: Set algebra by equality
//! - [`shuffle`] / [`shuffle_with`]: Fisher–Yates shuffling
//!
//! Every operation returns a new `Vec`; inputs are never modified.
//!
//! # Examples
//!
//! ```rust
//! use underbar::algebra::{difference, flatten, intersection};
//! use underbar::nested;
//!
//! assert_eq!(flatten(&nested![1, [2], [3, [[4]]]]), vec![1, 2, 3, 4]);
//!
//! let first = [1, 2, 3];
//! let second = [2, 3, 4];
//! let third = [3, 4, 5];
//! assert_eq!(intersection(&[&first[..], &second[..], &third[..]]), vec![3]);
//! assert_eq!(difference(&[1, 2, 3, 4], &[&[2, 4][..]]), vec![1, 3]);
//! ```

mod flatten;
mod set;
mod shuffle;
mod sort;
mod zip;

pub use flatten::{Nested, flatten};
pub use set::{difference, intersection};
pub use shuffle::{shuffle, shuffle_with};
pub use sort::{sort_by, sort_by_property};
pub use zip::{zip, zip2};
