//! Shallow merging of [`Mapping`](crate::collection::Mapping)s.
//!
//! - [`extend`]: Copy every key, later sources win
//! - [`defaults`]: Copy only keys the target does not have yet
//!
//! Both mutate only their explicit target and return it for chaining.
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::Mapping;
//! use underbar::object::{defaults, extend};
//!
//! let mut settings = Mapping::from([("color".to_string(), "red")]);
//! let overrides = Mapping::from([("color".to_string(), "blue")]);
//! let fallbacks = Mapping::from([
//!     ("color".to_string(), "green"),
//!     ("size".to_string(), "large"),
//! ]);
//!
//! extend(&mut settings, &[&overrides]);
//! defaults(&mut settings, &[&fallbacks]);
//!
//! assert_eq!(settings["color"], "blue");
//! assert_eq!(settings["size"], "large");
//! ```

mod merge;

pub use merge::{defaults, extend};
