//! Timer capability and deferred invocation.
//!
//! The library does not own a timer. Deferred work is handed to a
//! [`Scheduler`], which runs it no earlier than the requested wait. The
//! provided [`TokioScheduler`] spawns a task on a Tokio runtime.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::UnderbarError;

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Something that can run a task after a wait.
///
/// Implementations must run each task exactly once, no earlier than `wait`
/// after `schedule` returns. No ordering between tasks is promised beyond
/// their fire times, and no cancellation is required.
pub trait Scheduler {
    /// A handle to the scheduled task.
    type Handle;

    /// Schedules `task` to run after `wait` and returns immediately.
    fn schedule(&self, wait: Duration, task: Task) -> Self::Handle;
}

/// A [`Scheduler`] backed by a Tokio runtime.
///
/// Tasks are spawned onto the runtime and sleep with
/// [`tokio::time::sleep`], so paused test time applies to them.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Creates a scheduler that spawns onto the given runtime.
    #[inline]
    pub const fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Creates a scheduler for the runtime the caller is running in.
    ///
    /// # Errors
    ///
    /// Returns [`UnderbarError::NoRuntime`] when called outside of a Tokio
    /// runtime.
    pub fn current() -> Result<Self, UnderbarError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|_| UnderbarError::NoRuntime)
    }
}

impl Scheduler for TokioScheduler {
    type Handle = JoinHandle<()>;

    fn schedule(&self, wait: Duration, task: Task) -> JoinHandle<()> {
        self.handle.spawn(async move {
            tokio::time::sleep(wait).await;
            task();
        })
    }
}

/// Calls `function(arguments)` once, no earlier than `wait` from now,
/// without blocking.
///
/// The result of `function` is discarded. The returned handle can be
/// awaited to observe completion; dropping it does not cancel the call.
///
/// # Errors
///
/// Returns [`UnderbarError::NoRuntime`] when called outside of a Tokio
/// runtime.
///
/// # Examples
///
/// ```rust
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::time::Duration;
/// use underbar::function::delay;
///
/// let total = Arc::new(AtomicUsize::new(0));
/// let target = Arc::clone(&total);
/// let handle = delay(
///     move |(left, right): (usize, usize)| {
///         target.fetch_add(left + right, Ordering::SeqCst);
///     },
///     Duration::from_millis(10),
///     (2, 3),
/// )
/// .unwrap();
///
/// assert_eq!(total.load(Ordering::SeqCst), 0);
/// handle.await.unwrap();
/// assert_eq!(total.load(Ordering::SeqCst), 5);
/// # }
/// ```
pub fn delay<F, A>(function: F, wait: Duration, arguments: A) -> Result<JoinHandle<()>, UnderbarError>
where
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    let scheduler = TokioScheduler::current()?;
    Ok(delay_on(&scheduler, function, wait, arguments))
}

/// Like [`delay`], but schedules on an explicit [`Scheduler`].
pub fn delay_on<S, F, A>(scheduler: &S, function: F, wait: Duration, arguments: A) -> S::Handle
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    tracing::debug!(?wait, "scheduling delayed call");
    scheduler.schedule(wait, Box::new(move || function(arguments)))
}
