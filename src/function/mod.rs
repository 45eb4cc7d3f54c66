//! Function decorators.
//!
//! A decorator takes a function and returns a value that behaves like a
//! function with modified invocation semantics. Each decorator instance
//! exclusively owns its state; nothing is shared between separately created
//! instances.
//!
//! # Overview
//!
//! - [`identity`]: Returns its argument unchanged
//! - [`once`]: Runs the function on the first call only
//! - [`memoize`]: Caches results by argument
//! - [`delay`]: Runs the function once after a wait (`async` feature)
//! - [`throttle`]: Runs the function at most once per window (`async`
//!   feature)
//!
//! # Examples
//!
//! ```rust
//! use underbar::function::{memoize, once};
//!
//! let initialize = once(|seed: u64| seed * 2);
//! assert_eq!(initialize.call(21), 42);
//! assert_eq!(initialize.call(1000), 42);
//!
//! let square = memoize(|number: u64| number * number);
//! assert_eq!(square.call(12), 144);
//! assert_eq!(square.len(), 1);
//! ```
//!
//! # Timers
//!
//! [`delay`] and [`throttle`] hand deferred work to a [`Scheduler`]. The
//! default [`TokioScheduler`] spawns onto the current Tokio runtime, so these
//! must be called from inside one:
//!
//! ```rust
//! # #[cfg(feature = "async")]
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! use std::time::Duration;
//! use underbar::function::delay;
//!
//! let handle = delay(|name: &str| println!("hello, {name}"), Duration::from_millis(5), "world")
//!     .expect("inside a runtime");
//! handle.await.expect("task completes");
//! # }
//! # #[cfg(not(feature = "async"))]
//! # fn main() {}
//! ```

mod identity;
mod memoize;
mod once;
#[cfg(feature = "async")]
mod schedule;
#[cfg(feature = "async")]
mod throttle;

pub use identity::identity;
pub use memoize::{Memoized, memoize};
pub use once::{Once, OnceState, once};
#[cfg(feature = "async")]
pub use schedule::{Scheduler, Task, TokioScheduler, delay, delay_on};
#[cfg(feature = "async")]
pub use throttle::{ThrottlePolicy, Throttled, throttle, throttle_with};
