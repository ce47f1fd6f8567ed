use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

#[cfg(test)]
mod tests;

use crate::control::request_redraw;
use crate::hooks::with_hook_context;

/// Shared storage behind a `use_state` slot.
///
/// Reads go through an RwLock so many readers never contend; every write
/// bumps a version counter and schedules a redraw so the owning component is
/// rendered again with the new value.
#[derive(Debug)]
pub struct StateContainer<T> {
    value: RwLock<T>,
    version: Mutex<u64>,
}

impl<T> StateContainer<T> {
    pub fn new<F>(initializer: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self {
            value: RwLock::new(initializer()),
            version: Mutex::new(0),
        }
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.read().clone()
    }

    fn commit(&self) {
        {
            let mut version = self.version.lock();
            *version += 1;
        }
        request_redraw();
    }

    pub fn set(&self, new_value: T) {
        {
            let mut value = self.value.write();
            *value = new_value;
        }
        self.commit();
    }

    /// Read-modify-write under the write lock, so concurrent updates never
    /// interleave between the read and the write
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&T) -> T,
    {
        {
            let mut value = self.value.write();
            let next = updater(&value);
            *value = next;
        }
        self.commit();
    }

    pub fn version(&self) -> u64 {
        *self.version.lock()
    }
}

/// Read side of a `use_state` pair
#[derive(Debug)]
pub struct StateHandle<T> {
    container: Arc<StateContainer<T>>,
}

impl<T> StateHandle<T> {
    fn from_container(container: Arc<StateContainer<T>>) -> Self {
        Self { container }
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.container.get()
    }

    pub fn version(&self) -> u64 {
        self.container.version()
    }
}

impl<T: Clone> StateHandle<T> {
    /// Project a field out of the value without cloning the whole of it
    /// first at the call site
    pub fn field<F, R>(&self, getter: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let value = self.get();
        getter(&value)
    }

    /// Derive a computed value from the current state
    pub fn map<F, R>(&self, mapper: F) -> R
    where
        F: FnOnce(T) -> R,
    {
        mapper(self.get())
    }
}

impl<T> Clone for StateHandle<T> {
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
        }
    }
}

/// Write side of a `use_state` pair. Cloneable and thread-safe, so it can be
/// moved into key handlers and spawned tasks.
#[derive(Debug)]
pub struct StateSetter<T> {
    container: Arc<StateContainer<T>>,
}

impl<T> StateSetter<T> {
    fn new(container: Arc<StateContainer<T>>) -> Self {
        Self { container }
    }

    pub fn set(&self, new_value: T) {
        self.container.set(new_value);
    }

    /// Functional update: `set_count.update(|prev| prev + 1)`
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&T) -> T,
    {
        self.container.update(updater);
    }

    #[cfg(test)]
    pub(crate) fn container(&self) -> &Arc<StateContainer<T>> {
        &self.container
    }
}

impl<T> Clone for StateSetter<T> {
    fn clone(&self) -> Self {
        Self {
            container: self.container.clone(),
        }
    }
}

/// State hook: a value that persists across renders of one component
/// instance, plus a setter whose writes schedule the next render.
///
/// ```rust,no_run
/// # use weft_core::hooks::state::use_state;
/// # use weft_core::hooks::{HookContext, set_hook_context};
/// # use std::rc::Rc;
/// # set_hook_context(Rc::new(HookContext::new()));
/// let (count, set_count) = use_state(|| 0);
/// assert_eq!(count.get(), 0);
/// set_count.update(|prev| prev + 1);
/// assert_eq!(count.get(), 1);
/// ```
///
/// The initializer runs only on the first render; later renders return the
/// stored container untouched. Panics outside a render cycle.
pub fn use_state<T, F>(initializer: F) -> (StateHandle<T>, StateSetter<T>)
where
    T: 'static,
    F: FnOnce() -> T,
{
    with_hook_context(|ctx| {
        let index = ctx.next_slot_index();
        let slot = ctx.get_or_init_slot(index, || Arc::new(StateContainer::new(initializer)));
        let container = slot.borrow().clone();

        (
            StateHandle::from_container(container.clone()),
            StateSetter::new(container),
        )
    })
}
