//! Async request lifecycle for render-driven components.
//!
//! A component cannot await; it reads a snapshot of an operation's state
//! each render and launches work in response to events. `use_request` owns
//! that state: `Idle` until launched, `Pending` while the spawned task runs,
//! then `Resolved`/`Error`. Completion schedules a redraw so the owning
//! component renders the outcome.

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use tokio::task::JoinHandle;


use crate::control::request_redraw;
use crate::hooks::with_hook_context;
use crate::panic_handler::spawn_catch_panic;

/// Snapshot of an async operation
#[derive(Debug, Default, Clone, PartialEq)]
pub enum RequestState<T, E> {
    /// Nothing launched yet
    #[default]
    Idle,
    /// A task is in flight
    Pending,
    /// The task finished with a value
    Resolved(T),
    /// The task finished with an error
    Error(E),
}

impl<T, E> RequestState<T, E> {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, RequestState::Resolved(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RequestState::Error(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            RequestState::Resolved(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            RequestState::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> RequestState<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            RequestState::Idle => RequestState::Idle,
            RequestState::Pending => RequestState::Pending,
            RequestState::Resolved(value) => RequestState::Resolved(f(value)),
            RequestState::Error(error) => RequestState::Error(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for RequestState<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => RequestState::Resolved(value),
            Err(error) => RequestState::Error(error),
        }
    }
}

/// Handle to one request slot.
///
/// Cloneable; clones share the state, so a handle moved into a key handler
/// can launch work the component observes on later renders.
#[derive(Debug)]
pub struct RequestHandle<T, E> {
    state: Arc<RwLock<RequestState<T, E>>>,
    task: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl<T, E> Clone for RequestHandle<T, E> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            task: self.task.clone(),
        }
    }
}

impl<T, E> RequestHandle<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(RequestState::Idle)),
            task: Arc::new(Mutex::new(None)),
        }
    }

    /// Current snapshot
    pub fn state(&self) -> RequestState<T, E> {
        self.state.read().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.state.read().is_pending()
    }

    /// Launch `future` on the tokio runtime.
    ///
    /// Any task already in flight is aborted first; its late result is
    /// discarded rather than clobbering the newer launch. Must be called
    /// where a tokio runtime is current.
    pub fn launch<F>(&self, future: F)
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        self.abort_in_flight();
        *self.state.write() = RequestState::Pending;
        request_redraw();

        let state = self.state.clone();
        let task = spawn_catch_panic(async move {
            let outcome = future.await;
            *state.write() = RequestState::from(outcome);
            request_redraw();
        });
        *self.task.lock() = Some(task);
    }

    /// Abort any in-flight task and return to `Idle`
    pub fn cancel(&self) {
        self.abort_in_flight();
        *self.state.write() = RequestState::Idle;
        request_redraw();
    }

    fn abort_in_flight(&self) {
        if let Some(task) = self.task.lock().take() {
            task.abort();
        }
    }
}

/// Request hook: allocates a [`RequestHandle`] in a hook slot, shared across
/// renders of one component instance.
pub fn use_request<T, E>() -> RequestHandle<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    with_hook_context(|ctx| {
        let index = ctx.next_slot_index();
        let slot = ctx.get_or_init_slot(index, RequestHandle::new);
        let handle = slot.borrow().clone();
        handle
    })
}
