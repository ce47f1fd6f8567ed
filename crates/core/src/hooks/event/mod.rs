//! Global keyboard routing.
//!
//! Widgets register interest in keys; the runtime feeds every key event
//! through [`process_global_event`]. Handlers return `true` to stop
//! propagation. Two registries exist: per-key handlers for discrete
//! bindings (`+`, `q`, Tab) and catch-all capture handlers for widgets that
//! consume free text.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use lazy_static::lazy_static;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use crate::hooks::with_hook_context;

type KeyHandler = dyn Fn() -> bool + Send + Sync + 'static;
type CaptureHandler = dyn Fn(&KeyEvent) -> bool + Send + Sync + 'static;

lazy_static! {
    static ref KEY_HANDLERS: Mutex<HashMap<KeyCode, Vec<Arc<KeyHandler>>, ahash::RandomState>> =
        Mutex::new(HashMap::default());
    static ref CAPTURE_HANDLERS: Mutex<Vec<Arc<CaptureHandler>>> = Mutex::new(Vec::new());
}

/// Register a handler for one key code.
///
/// Return `true` from the handler to mark the event handled and stop
/// propagation; `false` lets later handlers for the same key run.
pub fn on_global_event<F>(key: KeyCode, handler: F)
where
    F: Fn() -> bool + Send + Sync + 'static,
{
    KEY_HANDLERS.lock().entry(key).or_default().push(Arc::new(handler));
}

/// Register a catch-all handler that sees every key press, after the
/// per-key handlers had their chance
pub fn on_any_key<F>(handler: F)
where
    F: Fn(&KeyEvent) -> bool + Send + Sync + 'static,
{
    CAPTURE_HANDLERS.lock().push(Arc::new(handler));
}

/// Route a key event through the registries.
///
/// Only press events are routed; repeats and releases are dropped. Returns
/// whether any handler claimed the event.
pub fn process_global_event(event: &KeyEvent) -> bool {
    if event.kind != KeyEventKind::Press {
        return false;
    }

    {
        let handlers = KEY_HANDLERS.lock();
        if let Some(for_key) = handlers.get(&event.code) {
            for handler in for_key {
                if handler() {
                    return true;
                }
            }
        }
    }

    let capture = CAPTURE_HANDLERS.lock();
    for handler in capture.iter() {
        if handler(event) {
            return true;
        }
    }
    false
}

/// Drop every registered handler, so one mounted tree's bindings cannot
/// leak into the next
pub fn clear_global_handlers() {
    KEY_HANDLERS.lock().clear();
    CAPTURE_HANDLERS.lock().clear();
}

/// Hook form of [`on_global_event`]: registers on the first render of the
/// component instance only, so re-renders do not stack duplicate handlers.
pub fn use_key_handler<F>(key: KeyCode, handler: F)
where
    F: Fn() -> bool + Send + Sync + 'static,
{
    with_hook_context(|ctx| {
        let index = ctx.next_slot_index();
        if !ctx.has_slot(index) {
            on_global_event(key, handler);
        }
        // The slot value is just the registration marker
        let _ = ctx.get_or_init_slot(index, || ());
    })
}

/// Hook form of [`on_any_key`], registered once per component instance
pub fn use_key_capture<F>(handler: F)
where
    F: Fn(&KeyEvent) -> bool + Send + Sync + 'static,
{
    with_hook_context(|ctx| {
        let index = ctx.next_slot_index();
        if !ctx.has_slot(index) {
            on_any_key(handler);
        }
        let _ = ctx.get_or_init_slot(index, || ());
    })
}
