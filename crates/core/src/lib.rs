mod component;
pub use component::{Component, IntoElement, cleanup_unmounted};

pub mod api;
pub mod control;
pub mod hooks;
pub mod panic_handler;

// Re-export commonly used items
pub use control::{
    exit_guard, redraw_requested, request_exit, request_redraw, reset_exit, should_exit,
    take_redraw,
};
pub use hooks::event::{clear_global_handlers, on_any_key, on_global_event, process_global_event};
