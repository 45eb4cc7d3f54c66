//! Rate limiting: run a function at most once per time window.
//!
//! # Firing Policy
//!
//! [`ThrottlePolicy`] selects what happens to calls that arrive while a
//! window is still open:
//!
//! | Policy                        | First call in a window | Calls inside the window                          |
//! |-------------------------------|------------------------|--------------------------------------------------|
//! | [`FireBoth`] (default)        | runs immediately       | coalesced; the latest runs when the window ends  |
//! | [`DropTrailing`]              | runs immediately       | dropped                                          |
//! | [`FireTrailing`]              | deferred               | coalesced; the latest runs when the window ends  |
//!
//! [`FireBoth`]: ThrottlePolicy::FireBoth
//! [`DropTrailing`]: ThrottlePolicy::DropTrailing
//! [`FireTrailing`]: ThrottlePolicy::FireTrailing

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::schedule::{Scheduler, TokioScheduler};
use crate::error::UnderbarError;

/// What a [`Throttled`] function does with calls made inside an open
/// window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ThrottlePolicy {
    /// Leading and trailing edge: the first call runs at once, and the most
    /// recent call made inside the window runs when it closes.
    #[default]
    FireBoth,
    /// Leading edge only: calls inside the window are dropped.
    DropTrailing,
    /// Trailing edge only: every call is deferred, and the most recent one
    /// runs `wait` after the first call of the window.
    FireTrailing,
}

struct ThrottleState<A, R> {
    last_run: Option<Instant>,
    pending: Option<A>,
    timer_armed: bool,
    last_result: Option<R>,
}

struct Shared<F, A, R> {
    function: F,
    wait: Duration,
    state: Mutex<ThrottleState<A, R>>,
}

impl<F, A, R> Shared<F, A, R>
where
    F: Fn(A) -> R,
{
    /// Runs the pending call, if any, at the end of a window.
    fn fire_trailing(&self) {
        let pending = {
            let mut state = self.state.lock();
            state.timer_armed = false;
            let pending = state.pending.take();
            if pending.is_some() {
                state.last_run = Some(Instant::now());
            }
            pending
        };
        if let Some(argument) = pending {
            let result = (self.function)(argument);
            self.state.lock().last_result = Some(result);
        }
    }
}

enum Decision<A> {
    Run(A),
    Arm(Duration),
    Coalesce,
    Discard,
}

/// A function wrapper that runs its function at most once per window.
///
/// Created by [`throttle`] or [`throttle_with`]. The wrapper is `Send +
/// Sync`; the function is never called while the internal lock is held.
///
/// # Examples
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread", start_paused = true)]
/// # async fn main() {
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::time::Duration;
/// use underbar::function::throttle;
///
/// let runs = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&runs);
/// let save = throttle(
///     move |document: &'static str| {
///         counter.fetch_add(1, Ordering::SeqCst);
///         document.len()
///     },
///     Duration::from_millis(100),
/// )
/// .unwrap();
///
/// assert_eq!(save.call("a"), Some(1));
/// assert_eq!(save.call("bb"), Some(1));
/// assert_eq!(save.call("ccc"), Some(1));
/// assert_eq!(runs.load(Ordering::SeqCst), 1);
///
/// tokio::time::sleep(Duration::from_millis(150)).await;
/// assert_eq!(runs.load(Ordering::SeqCst), 2);
/// assert_eq!(save.last_result(), Some(3));
/// # }
/// ```
pub struct Throttled<F, A, R, S = TokioScheduler> {
    shared: Arc<Shared<F, A, R>>,
    policy: ThrottlePolicy,
    scheduler: S,
}

static_assertions::assert_impl_all!(Throttled<fn(i32) -> i32, i32, i32>: Send, Sync);

/// Wraps `function` so it runs at most once per `wait`, using
/// [`ThrottlePolicy::FireBoth`] and the current Tokio runtime.
///
/// # Errors
///
/// Returns [`UnderbarError::NoRuntime`] when called outside of a Tokio
/// runtime.
pub fn throttle<F, A, R>(
    function: F,
    wait: Duration,
) -> Result<Throttled<F, A, R>, UnderbarError>
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
{
    let scheduler = TokioScheduler::current()?;
    Ok(throttle_with(
        function,
        wait,
        ThrottlePolicy::default(),
        scheduler,
    ))
}

/// Wraps `function` so it runs at most once per `wait`, with an explicit
/// policy and scheduler.
pub fn throttle_with<F, A, R, S>(
    function: F,
    wait: Duration,
    policy: ThrottlePolicy,
    scheduler: S,
) -> Throttled<F, A, R, S>
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
    S: Scheduler,
{
    Throttled {
        shared: Arc::new(Shared {
            function,
            wait,
            state: Mutex::new(ThrottleState {
                last_run: None,
                pending: None,
                timer_armed: false,
                last_result: None,
            }),
        }),
        policy,
        scheduler,
    }
}

impl<F, A, R, S> Throttled<F, A, R, S>
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Send + 'static,
    R: Clone + Send + 'static,
    S: Scheduler,
{
    /// Invokes the throttled function according to the policy.
    ///
    /// Returns the result of this call when it ran immediately, and
    /// otherwise the most recent result produced so far (`None` before the
    /// first run).
    pub fn call(&self, argument: A) -> Option<R> {
        let now = Instant::now();
        let wait = self.shared.wait;

        let decision = {
            let mut state = self.shared.state.lock();
            let window_closed = state
                .last_run
                .is_none_or(|last_run| now.duration_since(last_run) >= wait);

            match self.policy {
                ThrottlePolicy::DropTrailing if window_closed => {
                    state.last_run = Some(now);
                    Decision::Run(argument)
                }
                ThrottlePolicy::DropTrailing => Decision::Discard,
                ThrottlePolicy::FireBoth if window_closed && !state.timer_armed => {
                    state.last_run = Some(now);
                    Decision::Run(argument)
                }
                ThrottlePolicy::FireBoth | ThrottlePolicy::FireTrailing => {
                    state.pending = Some(argument);
                    if state.timer_armed {
                        Decision::Coalesce
                    } else {
                        state.timer_armed = true;
                        let remaining = match (self.policy, state.last_run) {
                            (ThrottlePolicy::FireBoth, Some(last_run)) => {
                                wait.saturating_sub(now.duration_since(last_run))
                            }
                            _ => wait,
                        };
                        Decision::Arm(remaining)
                    }
                }
            }
        };

        match decision {
            Decision::Run(argument) => {
                let result = (self.shared.function)(argument);
                self.shared.state.lock().last_result = Some(result.clone());
                Some(result)
            }
            Decision::Arm(remaining) => {
                tracing::debug!(?remaining, "scheduling trailing throttled call");
                let shared = Arc::clone(&self.shared);
                let _handle = self
                    .scheduler
                    .schedule(remaining, Box::new(move || shared.fire_trailing()));
                self.last_result()
            }
            Decision::Coalesce => {
                tracing::trace!("throttled call coalesced into pending trailing call");
                self.last_result()
            }
            Decision::Discard => {
                tracing::trace!("throttled call dropped");
                self.last_result()
            }
        }
    }
}

impl<F, A, R, S> Throttled<F, A, R, S> {
    /// Returns the most recent result produced by the function.
    pub fn last_result(&self) -> Option<R>
    where
        R: Clone,
    {
        self.shared.state.lock().last_result.clone()
    }

    /// Returns `true` if a trailing call is waiting for its window to end.
    pub fn has_pending(&self) -> bool {
        self.shared.state.lock().pending.is_some()
    }

    /// The firing policy.
    pub const fn policy(&self) -> ThrottlePolicy {
        self.policy
    }

    /// The window length.
    pub fn wait(&self) -> Duration {
        self.shared.wait
    }
}

impl<F, A, R, S> fmt::Debug for Throttled<F, A, R, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Throttled")
            .field("wait", &self.shared.wait)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
