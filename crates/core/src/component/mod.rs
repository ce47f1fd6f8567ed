use ratatui::Frame;
use ratatui::layout::Rect;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};


thread_local! {
    // Mounted component instances for the tree rendered on this thread
    static MOUNT_LEDGER: RefCell<MountLedger> = RefCell::new(MountLedger::default());
}

// Type-erased record of a mounted component, kept so its unmount callback
// can fire after the instance left the tree
struct MountedEntry {
    unmount: Box<dyn Fn()>,
}

impl MountedEntry {
    fn of<T: Component>(component: &T) -> Self {
        let clone = component.clone();
        Self {
            unmount: Box::new(move || clone.on_unmount()),
        }
    }
}

#[derive(Default)]
struct MountLedger {
    // Every component id seen since its first render
    mounted: HashSet<u64>,
    // Ids rendered during the cycle currently in progress
    seen_this_cycle: HashSet<u64>,
    entries: HashMap<u64, MountedEntry>,
}

impl MountLedger {
    // Returns true when this id is mounting for the first time
    fn record<T: Component>(&mut self, id: u64, component: &T) -> bool {
        self.seen_this_cycle.insert(id);
        let is_new = self.mounted.insert(id);
        if is_new {
            self.entries.insert(id, MountedEntry::of(component));
        }
        is_new
    }

    fn sweep(&mut self) {
        let gone: Vec<u64> = self
            .mounted
            .difference(&self.seen_this_cycle)
            .copied()
            .collect();
        for id in gone {
            if let Some(entry) = self.entries.remove(&id) {
                (entry.unmount)();
            }
            self.mounted.remove(&id);
        }
        self.seen_this_cycle.clear();
    }
}

/// A renderable unit of the UI tree.
///
/// Components are cheap-to-clone structs whose `render` runs once per cycle
/// and may call hooks. Hook calls must happen in the same order on every
/// render of the same instance; hook slots are positional.
pub trait Component: Clone + 'static {
    /// Called once, on the first render of this instance
    fn on_mount(&self) {}

    /// Called after the instance stops appearing in render cycles
    fn on_unmount(&self) {}

    /// Called on every render
    fn render(&self, area: Rect, frame: &mut Frame);

    /// Identifier used for mount tracking. Defaults to the type name, which
    /// is sufficient when a type is mounted at most once per tree.
    fn component_id(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }

    /// Render with mount/unmount lifecycle tracking. The runtime calls this
    /// for the root; containers call it for their children.
    fn render_with_mount(&self, area: Rect, frame: &mut Frame) {
        let id = hash_id(&self.component_id());
        let first_render = MOUNT_LEDGER.with(|ledger| ledger.borrow_mut().record(id, self));
        if first_render {
            self.on_mount();
        }
        self.render(area, frame);
    }
}

fn hash_id(component_id: &str) -> u64 {
    use std::hash::{Hash, Hasher};
    let mut hasher = ahash::AHasher::default();
    component_id.hash(&mut hasher);
    hasher.finish()
}

/// Fire `on_unmount` for every component that was mounted but did not appear
/// in the render cycle that just finished. The runtime calls this once per
/// cycle, after drawing.
pub fn cleanup_unmounted() {
    MOUNT_LEDGER.with(|ledger| ledger.borrow_mut().sweep());
}

#[cfg(test)]
fn reset_mount_ledger() {
    MOUNT_LEDGER.with(|ledger| *ledger.borrow_mut() = MountLedger::default());
}

/// Conversion into a renderable root element
pub trait IntoElement {
    type Element: Component;
    fn into_element(self) -> Self::Element;
}

impl<T: Component> IntoElement for T {
    type Element = T;
    fn into_element(self) -> Self::Element {
        self
    }
}
