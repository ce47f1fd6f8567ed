use std::{any::Any, cell::RefCell, collections::HashMap, rc::Rc};

pub mod callback;
pub mod context;
pub mod counter;
pub mod event;
pub mod request;
pub mod state;

#[cfg(test)]
pub mod test_utils;

thread_local! {
    static CURRENT_CONTEXT: RefCell<Option<Rc<HookContext>>> = const { RefCell::new(None) };
}

/// Per-component-instance hook storage.
///
/// Each hook call claims the next slot index; the runtime resets the cursor
/// at the top of every render cycle, so slot identity is purely positional.
/// A component must therefore call the same hooks in the same order on every
/// render.
pub struct HookContext {
    slots: RefCell<HashMap<usize, Box<dyn Any>>>,
    cursor: RefCell<usize>,
}

impl HookContext {
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(HashMap::new()),
            cursor: RefCell::new(0),
        }
    }

    /// Claim the next slot index, advancing the cursor
    pub fn next_slot_index(&self) -> usize {
        let mut cursor = self.cursor.borrow_mut();
        let index = *cursor;
        *cursor += 1;
        index
    }

    /// Rewind the cursor for a new render cycle
    pub fn reset_cursor(&self) {
        *self.cursor.borrow_mut() = 0;
    }

    /// Current cursor position (number of hook calls so far this cycle)
    pub fn cursor(&self) -> usize {
        *self.cursor.borrow()
    }

    /// Fetch the slot value at `index`, initializing it with `init` on the
    /// first render. The value is shared, not copied, so hook containers
    /// persist across renders of the same instance.
    pub fn get_or_init_slot<T: 'static, F>(&self, index: usize, init: F) -> Rc<RefCell<T>>
    where
        F: FnOnce() -> T,
    {
        let mut slots = self.slots.borrow_mut();
        if let Some(existing) = slots.get(&index)
            && let Some(slot) = existing.downcast_ref::<Rc<RefCell<T>>>()
        {
            return slot.clone();
        }
        let slot = Rc::new(RefCell::new(init()));
        slots.insert(index, Box::new(slot.clone()));
        slot
    }

    /// Whether a slot has been initialized
    pub fn has_slot(&self, index: usize) -> bool {
        self.slots.borrow().contains_key(&index)
    }

    /// Drop all slots and rewind the cursor
    pub fn clear(&self) {
        self.slots.borrow_mut().clear();
        self.reset_cursor();
    }
}

impl Default for HookContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Install `context` as the current hook context for this thread
pub fn set_hook_context(context: Rc<HookContext>) {
    CURRENT_CONTEXT.with(|current| {
        *current.borrow_mut() = Some(context);
    });
}

/// The current hook context, if a render cycle is in progress
pub fn get_hook_context() -> Option<Rc<HookContext>> {
    CURRENT_CONTEXT.with(|current| current.borrow().clone())
}

/// Remove the current hook context
pub fn clear_hook_context() {
    CURRENT_CONTEXT.with(|current| {
        *current.borrow_mut() = None;
    });
}

/// Run `f` against the current hook context.
///
/// Panics when called outside a render cycle; every `use_*` function goes
/// through here, which is what makes "hooks only inside components" hold.
pub fn with_hook_context<R>(f: impl FnOnce(&HookContext) -> R) -> R {
    let context = get_hook_context()
        .expect("hook called outside a render cycle; hooks may only run inside Component::render");
    f(&context)
}
