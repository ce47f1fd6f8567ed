//! Shared helpers for hook tests: simulate component lifecycle without a
//! terminal or a runtime loop.

use crate::hooks::{HookContext, clear_hook_context, set_hook_context};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

thread_local! {
    static TEST_CONTEXTS: RefCell<HashMap<&'static str, Rc<HookContext>>> =
        RefCell::new(HashMap::new());
}

/// Run `test_fn` as one render of the component named `component_id`.
///
/// The first call for an id creates a fresh context; every later call for
/// the same id reuses it with the hook cursor rewound, which is exactly what
/// the runtime does between frames. Different ids are fully independent.
///
/// ```rust,no_run
/// # use weft_core::hooks::test_utils::with_component_id;
/// # use weft_core::hooks::state::use_state;
/// with_component_id("Widget", |_| {
///     let (count, set_count) = use_state(|| 0);
///     set_count.set(42);
/// });
/// with_component_id("Widget", |_| {
///     let (count, _) = use_state(|| 0);
///     assert_eq!(count.get(), 42); // second render, state persisted
/// });
/// ```
pub fn with_component_id<F, R>(component_id: &'static str, test_fn: F) -> R
where
    F: FnOnce(&Rc<HookContext>) -> R,
{
    let context = TEST_CONTEXTS.with(|contexts| {
        let mut contexts = contexts.borrow_mut();
        if let Some(existing) = contexts.get(component_id) {
            existing.reset_cursor();
            existing.clone()
        } else {
            let fresh = Rc::new(HookContext::new());
            contexts.insert(component_id, fresh.clone());
            fresh
        }
    });

    set_hook_context(context.clone());
    let result = test_fn(&context);
    clear_hook_context();
    result
}

/// Forget every simulated component, so the next `with_component_id` starts
/// from a first render
pub fn cleanup_component_contexts() {
    TEST_CONTEXTS.with(|contexts| {
        contexts.borrow_mut().clear();
    });
}

/// Isolate a test from component state left behind by other tests, and
/// clean up afterwards even if the test panics
pub fn with_test_isolate<F, R>(test_fn: F) -> R
where
    F: FnOnce() -> R,
{
    cleanup_component_contexts();

    struct CleanupGuard;
    impl Drop for CleanupGuard {
        fn drop(&mut self) {
            cleanup_component_contexts();
        }
    }
    let _guard = CleanupGuard;

    test_fn()
}

/// A throwaway single-render context for tests that do not need re-render
/// simulation
pub fn with_hook_context<F, R>(test_fn: F) -> R
where
    F: FnOnce(&Rc<HookContext>) -> R,
{
    let context = Rc::new(HookContext::new());
    set_hook_context(context.clone());
    let result = test_fn(&context);
    clear_hook_context();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::state::use_state;

    #[test]
    fn test_with_hook_context_is_fresh_every_call() {
        with_hook_context(|_| {
            let (value, setter) = use_state(|| 1);
            setter.set(2);
            assert_eq!(value.get(), 2);
        });

        with_hook_context(|_| {
            let (value, _) = use_state(|| 1);
            assert_eq!(value.get(), 1);
        });

        assert!(crate::hooks::get_hook_context().is_none());
    }

    #[test]
    fn test_with_component_id_rewinds_the_cursor() {
        with_test_isolate(|| {
            with_component_id("CursorRewind", |context| {
                let _ = use_state(|| 0);
                let _ = use_state(|| 0);
                assert_eq!(context.cursor(), 2);
            });

            with_component_id("CursorRewind", |context| {
                assert_eq!(context.cursor(), 0);
            });
        });
    }

    #[test]
    fn test_isolation_cleans_up_even_on_panic() {
        with_component_id("PanicResidue", |_| {
            let (_, setter) = use_state(|| 0);
            setter.set(9);
        });

        let outcome = std::panic::catch_unwind(|| {
            with_test_isolate(|| {
                with_component_id("PanicResidue", |_| {
                    let (value, _) = use_state(|| 0);
                    // Isolation wiped the earlier 9
                    assert_eq!(value.get(), 0);
                });
                panic!("deliberate");
            })
        });
        assert!(outcome.is_err());

        // The guard ran: the context created inside the isolate is gone too
        with_component_id("PanicResidue", |_| {
            let (value, _) = use_state(|| 0);
            assert_eq!(value.get(), 0);
        });
        cleanup_component_contexts();
    }
}
