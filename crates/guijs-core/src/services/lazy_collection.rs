//! Populate-once collection cell with single-flight population.
//!
//! The cell starts empty. The first caller of [`LazyCollection::get_or_populate`]
//! installs a pending marker before its first suspension point and starts the
//! population future; every caller that arrives while it runs awaits that same
//! shared future instead of starting another one. A successful result is stored
//! for the life of the cell. A failure is handed to every waiter and leaves the
//! cell empty so the next call starts over. A panicking population counts as a
//! failure: the cell is reset and the panic is resumed in every waiter.

use futures_util::future::{BoxFuture, FutureExt, Shared};
use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Outcome of one population; `Err` carries the message of a panic.
type Outcome<T, E> = Result<Result<Arc<[T]>, E>, Arc<str>>;

type Population<T, E> = Shared<BoxFuture<'static, Outcome<T, E>>>;

enum State<T, E> {
    Unpopulated,
    Pending(Population<T, E>),
    Populated(Arc<[T]>),
}

/// A collection that is populated at most once, on first use.
///
/// The lock guarding the state is only held for bookkeeping and never across
/// an await point.
pub struct LazyCollection<T, E> {
    state: Mutex<State<T, E>>,
}

impl<T, E> LazyCollection<T, E>
where
    T: Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Create an empty cell.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(State::Unpopulated),
        }
    }

    /// Return the stored collection, populating it first if needed.
    ///
    /// `populate` is only invoked when the cell is empty and no population is
    /// in flight. Concurrent callers share one population and receive the
    /// same `Arc` (or the same error).
    ///
    /// If the population panics, the cell is reset and every waiter panics
    /// with the same message.
    pub async fn get_or_populate<F, Fut>(&self, populate: F) -> Result<Arc<[T]>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>> + Send + 'static,
    {
        let pending = {
            let mut state = self.lock();
            match &*state {
                State::Populated(items) => return Ok(Arc::clone(items)),
                State::Pending(pending) => pending.clone(),
                State::Unpopulated => {
                    let fut = populate();
                    let pending: Population<T, E> =
                        AssertUnwindSafe(async move { fut.await.map(Arc::from) })
                            .catch_unwind()
                            .map(|caught| caught.map_err(|payload| panic_message(&*payload)))
                            .boxed()
                            .shared();
                    *state = State::Pending(pending.clone());
                    pending
                }
            }
        };

        let outcome = pending.clone().await;
        self.settle(&pending, &outcome);
        match outcome {
            Ok(result) => result,
            Err(message) => panic::resume_unwind(Box::new(message.to_string())),
        }
    }

    /// The stored collection, or `None` if it has not been populated yet.
    ///
    /// Never triggers a population.
    pub fn get(&self) -> Option<Arc<[T]>> {
        match &*self.lock() {
            State::Populated(items) => Some(Arc::clone(items)),
            State::Unpopulated | State::Pending(_) => None,
        }
    }

    /// Whether a population has completed successfully.
    pub fn is_populated(&self) -> bool {
        matches!(&*self.lock(), State::Populated(_))
    }

    /// Whether a population is currently in flight.
    pub fn is_pending(&self) -> bool {
        matches!(&*self.lock(), State::Pending(_))
    }

    // Only the population that is still installed may move the state on.
    // A waiter from an earlier, failed population must not clobber a retry.
    fn settle(&self, pending: &Population<T, E>, outcome: &Outcome<T, E>) {
        let mut state = self.lock();
        let is_current = matches!(&*state, State::Pending(current) if current.ptr_eq(pending));
        if is_current {
            *state = match outcome {
                Ok(Ok(items)) => State::Populated(Arc::clone(items)),
                Ok(Err(_)) | Err(_) => State::Unpopulated,
            };
        }
    }

    fn lock(&self) -> MutexGuard<'_, State<T, E>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> Arc<str> {
    payload
        .downcast_ref::<&str>()
        .map(|message| Arc::from(*message))
        .or_else(|| payload.downcast_ref::<String>().map(|message| Arc::from(message.as_str())))
        .unwrap_or_else(|| Arc::from("population panicked"))
}

impl<T, E> Default for LazyCollection<T, E>
where
    T: Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> fmt::Debug for LazyCollection<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &*self.state.lock().unwrap_or_else(PoisonError::into_inner) {
            State::Unpopulated => "unpopulated".to_string(),
            State::Pending(_) => "pending".to_string(),
            State::Populated(items) => format!("populated({})", items.len()),
        };
        f.debug_struct("LazyCollection")
            .field("state", &state)
            .finish()
    }
}
