//! Process-wide control flags shared between hooks and the runtime loop.
//!
//! Two independent signals live here: a latched exit request, and a redraw
//! flag that state mutations raise so the runtime knows the next frame is
//! worth drawing. Both are plain atomics; no ordering is needed beyond
//! acquire/release since each flag is a single bit of state.

use std::sync::atomic::{AtomicBool, Ordering};

static GLOBAL_EXIT: AtomicBool = AtomicBool::new(false);
static GLOBAL_REDRAW: AtomicBool = AtomicBool::new(false);

/// Request the application to exit
pub fn request_exit() {
    GLOBAL_EXIT.store(true, Ordering::Release);
}

/// Check if exit has been requested
pub fn should_exit() -> bool {
    GLOBAL_EXIT.load(Ordering::Acquire)
}

/// Reset the exit flag (useful for tests)
pub fn reset_exit() {
    GLOBAL_EXIT.store(false, Ordering::Release);
}

/// Schedule a redraw of the mounted tree.
///
/// Called by every state mutator (`StateSetter::set`, counter
/// increment/decrement, request completion). The runtime consumes the flag
/// with [`take_redraw`] at the top of its loop.
pub fn request_redraw() {
    GLOBAL_REDRAW.store(true, Ordering::Release);
}

/// Consume the redraw flag, returning whether a redraw was pending.
pub fn take_redraw() -> bool {
    GLOBAL_REDRAW.swap(false, Ordering::AcqRel)
}

/// Check the redraw flag without consuming it
pub fn redraw_requested() -> bool {
    GLOBAL_REDRAW.load(Ordering::Acquire)
}

/// A guard that resets the exit flag when dropped, so one application run
/// cannot leak an exit request into the next
pub struct ExitGuard;

impl Drop for ExitGuard {
    fn drop(&mut self) {
        reset_exit();
    }
}

/// Create a new exit guard
pub fn exit_guard() -> ExitGuard {
    ExitGuard
}
