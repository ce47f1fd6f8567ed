//! Configurable counter hook.
//!
//! `use_counter` owns an integer count seeded from a caller-supplied
//! configuration and exposes increment/decrement operations that move the
//! count by exactly the configured step. Every mutation schedules a redraw,
//! so the owning component sees the new count on its next render.

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;


use crate::control::request_redraw;
use crate::hooks::with_hook_context;

/// Configuration for [`use_counter`].
///
/// No validation is applied: a zero step makes both operations no-ops and a
/// negative step reverses them. Callers own the meaning of their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterConfig {
    /// Value the count starts from. Read once, when the hook slot is
    /// created; later renders never reset the count.
    pub initial_count: i64,
    /// Magnitude applied per increment/decrement. Re-read on every render,
    /// so a reconfigured step applies to future operations only.
    pub step: i64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial_count: 0,
            step: 1,
        }
    }
}

impl CounterConfig {
    pub fn initial_count(mut self, initial_count: i64) -> Self {
        self.initial_count = initial_count;
        self
    }

    pub fn step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }
}

// Backing storage for one counter slot. The count only ever moves by the
// stored step; the version counter tracks mutations for change detection.
#[derive(Debug)]
struct CounterCell {
    count: RwLock<i64>,
    step: RwLock<i64>,
    version: Mutex<u64>,
}

impl CounterCell {
    fn new(config: CounterConfig) -> Self {
        Self {
            count: RwLock::new(config.initial_count),
            step: RwLock::new(config.step),
            version: Mutex::new(0),
        }
    }

    fn shift(&self, direction: i64) {
        {
            let step = *self.step.read();
            let mut count = self.count.write();
            *count += direction * step;
        }
        {
            let mut version = self.version.lock();
            *version += 1;
        }
        request_redraw();
    }

    // Reconfiguration: replaces the step without touching count or version
    fn set_step(&self, step: i64) {
        *self.step.write() = step;
    }
}

/// Handle returned by [`use_counter`].
///
/// Cloneable and thread-safe; clones share the same cell, so a handle moved
/// into a key handler mutates the count the component reads on its next
/// render. The operations cannot fail and perform no I/O.
#[derive(Debug)]
pub struct CounterHandle {
    cell: Arc<CounterCell>,
}

impl CounterHandle {
    /// Current count
    pub fn count(&self) -> i64 {
        *self.cell.count.read()
    }

    /// Step currently applied per operation
    pub fn step(&self) -> i64 {
        *self.cell.step.read()
    }

    /// Move the count up by the configured step
    pub fn increment(&self) {
        self.cell.shift(1);
    }

    /// Move the count down by the configured step
    pub fn decrement(&self) {
        self.cell.shift(-1);
    }

    /// Number of mutations applied so far, for change detection
    pub fn version(&self) -> u64 {
        *self.cell.version.lock()
    }
}

impl Clone for CounterHandle {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

/// Counter hook.
///
/// ```rust,no_run
/// # use weft_core::hooks::counter::{CounterConfig, use_counter};
/// # use weft_core::hooks::{HookContext, set_hook_context};
/// # use std::rc::Rc;
/// # set_hook_context(Rc::new(HookContext::new()));
/// let counter = use_counter(CounterConfig::default().step(2));
/// counter.increment();
/// assert_eq!(counter.count(), 2);
/// counter.decrement();
/// assert_eq!(counter.count(), 0);
/// ```
///
/// On the first render the cell is seeded from `config`; on every later
/// render the supplied step replaces the stored one while the accumulated
/// count stays untouched. Operations invoked in sequence on one handle apply
/// in exactly that order; there is no batching here.
pub fn use_counter(config: CounterConfig) -> CounterHandle {
    with_hook_context(|ctx| {
        let index = ctx.next_slot_index();
        let slot = ctx.get_or_init_slot(index, || Arc::new(CounterCell::new(config)));
        let cell: Arc<CounterCell> = slot.borrow().clone();

        // A no-op on the first render; on re-renders this is the
        // reconfiguration path.
        cell.set_step(config.step);

        CounterHandle { cell }
    })
}
