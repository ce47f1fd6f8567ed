//! Context values shared down the component tree without prop threading.
//!
//! A parent provides a value by type; any component rendered later in the
//! same cycle can consume it. The provider stack is rebuilt every cycle, so
//! stale values never leak between frames.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;


use crate::hooks::with_hook_context;

thread_local! {
    static PROVIDERS: RefCell<HashMap<TypeId, Vec<Box<dyn Any>>>> =
        RefCell::new(HashMap::new());
}

/// Drop every provided value. The runtime calls this at the top of each
/// render cycle, before the root renders.
pub fn clear_context_providers() {
    PROVIDERS.with(|providers| {
        providers.borrow_mut().clear();
    });
}

/// Provide a context value for the rest of the current render cycle.
///
/// Returns the provided value so the provider can use it too. Nested
/// providers of the same type shadow outer ones.
pub fn use_context_provider<T, F>(create_value: F) -> T
where
    T: Clone + 'static,
    F: FnOnce() -> T,
{
    with_hook_context(|_ctx| {
        let value = create_value();
        let stored = value.clone();
        PROVIDERS.with(|providers| {
            providers
                .borrow_mut()
                .entry(TypeId::of::<T>())
                .or_default()
                .push(Box::new(stored));
        });
        value
    })
}

fn lookup<T: Clone + 'static>() -> Option<T> {
    PROVIDERS.with(|providers| {
        let providers = providers.borrow();
        providers
            .get(&TypeId::of::<T>())
            .and_then(|stack| stack.last())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .cloned()
    })
}

/// Consume a context value provided earlier in this render cycle.
///
/// Panics when no provider for `T` ran; use
/// [`use_context_with_default`] for values with a sensible fallback.
pub fn use_context<T>() -> T
where
    T: Clone + 'static,
{
    with_hook_context(|_ctx| {
        lookup::<T>().unwrap_or_else(|| {
            panic!(
                "no context value of type {} provided; call use_context_provider in an ancestor",
                std::any::type_name::<T>()
            )
        })
    })
}

/// Consume a context value, falling back to `T::default()` when no ancestor
/// provided one
pub fn use_context_with_default<T>() -> T
where
    T: Clone + Default + 'static,
{
    with_hook_context(|_ctx| lookup::<T>().unwrap_or_default())
}
