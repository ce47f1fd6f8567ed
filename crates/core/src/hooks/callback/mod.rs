//! Cloneable function handles for wiring widgets together.
//!
//! `Callback` is the currency for "tell my parent something happened": a
//! button stores a `Callback<()>` and emits it on press, the parent decides
//! what pressing means. `use_callback` pins one callback instance into a
//! hook slot so consumers comparing by identity see the same value on every
//! render.

use std::fmt;
use std::sync::Arc;


use crate::hooks::with_hook_context;

/// A shared, thread-safe function handle
pub struct Callback<IN, OUT = ()> {
    func: Arc<dyn Fn(IN) -> OUT + Send + Sync>,
}

impl<IN, OUT> Clone for Callback<IN, OUT> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
        }
    }
}

impl<IN, OUT> fmt::Debug for Callback<IN, OUT> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

impl<IN, OUT> Callback<IN, OUT> {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(IN) -> OUT + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Invoke the callback
    pub fn emit(&self, input: IN) -> OUT {
        (self.func)(input)
    }

    /// Adapt the input type: the returned callback maps its input through
    /// `adapter` before invoking this one
    pub fn reform<F, T>(&self, adapter: F) -> Callback<T, OUT>
    where
        F: Fn(T) -> IN + Send + Sync + 'static,
        IN: 'static,
        OUT: 'static,
    {
        let func = self.func.clone();
        Callback::new(move |input: T| func(adapter(input)))
    }
}

impl<IN> Callback<IN> {
    /// A callback that ignores its input and does nothing
    pub fn noop() -> Self {
        Callback::new(|_| ())
    }
}

impl<IN, OUT, F> From<F> for Callback<IN, OUT>
where
    F: Fn(IN) -> OUT + Send + Sync + 'static,
{
    fn from(func: F) -> Self {
        Callback::new(func)
    }
}

/// Memoize a callback in a hook slot.
///
/// The factory runs on the first render only; later renders return a clone
/// of the stored callback, so identity is stable across renders of the same
/// component instance.
pub fn use_callback<IN, OUT, F>(factory: F) -> Callback<IN, OUT>
where
    IN: 'static,
    OUT: 'static,
    F: FnOnce() -> Callback<IN, OUT>,
{
    with_hook_context(|ctx| {
        let index = ctx.next_slot_index();
        let slot = ctx.get_or_init_slot(index, factory);
        let callback = slot.borrow().clone();
        callback
    })
}
