//! The render cycle and the event loop.
//!
//! One cycle: install the root's hook context, rewind the hook cursor, drop
//! last frame's context providers, draw the tree with mount tracking, sweep
//! unmounted components, uninstall the context. The loop repeats cycles
//! whenever the redraw flag is raised and routes key events to the global
//! handler registries in between.

use crate::terminal::setup_terminal;
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::Backend};
use std::error::Error;
use std::rc::Rc;
use std::time::Duration;
use weft_core::hooks::context::clear_context_providers;
use weft_core::hooks::{HookContext, clear_hook_context, set_hook_context};
use weft_core::{
    Component, IntoElement, cleanup_unmounted, exit_guard, process_global_event, request_redraw,
    should_exit, take_redraw,
};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run one full render cycle of `element` against any backend.
///
/// Public so tests can drive frames against ratatui's `TestBackend` exactly
/// the way the loop drives real frames.
pub fn draw_element<B, T>(
    terminal: &mut Terminal<B>,
    element: &T,
    context: &Rc<HookContext>,
) -> std::io::Result<()>
where
    B: Backend,
    T: Component,
{
    set_hook_context(context.clone());
    context.reset_cursor();
    clear_context_providers();

    let result = terminal.draw(|frame| {
        element.render_with_mount(frame.area(), frame);
    });

    cleanup_unmounted();
    clear_hook_context();
    result.map(|_| ())
}

/// Run the application until an exit is requested.
///
/// `app` builds the root once; the same instance renders every frame, with
/// hook state carrying its evolving data. Key events go through
/// [`process_global_event`]; any state mutation raises the redraw flag and
/// the next pass of the loop draws a fresh frame.
pub fn run<F, T>(app: F) -> Result<(), Box<dyn Error>>
where
    F: Fn() -> T,
    T: IntoElement,
{
    let _exit = exit_guard();
    let mut terminal = setup_terminal()?;
    let context = Rc::new(HookContext::new());
    let element = app().into_element();

    // First frame is unconditional
    request_redraw();

    loop {
        if take_redraw() {
            set_hook_context(context.clone());
            context.reset_cursor();
            clear_context_providers();
            terminal.draw(|frame| {
                element.render_with_mount(frame.area(), frame);
            })?;
            cleanup_unmounted();
            clear_hook_context();
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    process_global_event(&key);
                }
                Event::Resize(_, _) => request_redraw(),
                _ => {}
            }
        }

        if should_exit() {
            return Ok(());
        }
    }
}

/// Draw a single frame and keep it on screen briefly; handy for
/// fire-and-forget demos that have no event handling
pub fn render_once<F, T>(app: F) -> Result<(), Box<dyn Error>>
where
    F: Fn() -> T,
    T: IntoElement,
{
    let mut terminal = setup_terminal()?;
    let context = Rc::new(HookContext::new());
    let element = app().into_element();

    set_hook_context(context.clone());
    context.reset_cursor();
    clear_context_providers();
    terminal.draw(|frame| {
        element.render_with_mount(frame.area(), frame);
    })?;
    cleanup_unmounted();
    clear_hook_context();

    std::thread::sleep(Duration::from_millis(2000));
    Ok(())
}
