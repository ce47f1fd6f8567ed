//! Error boundary: contain a child's render panic instead of tearing down
//! the whole application.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::panic::AssertUnwindSafe;
use weft_core::Component;
use weft_core::hooks::state::use_state;
use weft_core::panic_handler::{catch_panic, panic_message};

/// Wraps a child component; if the child's render panics, the panic is
/// logged and this subtree latches into a fallback view. The rest of the
/// tree keeps rendering.
#[derive(Clone)]
pub struct ErrorBoundary<C: Component> {
    child: C,
}

impl<C: Component> ErrorBoundary<C> {
    pub fn new(child: C) -> Self {
        Self { child }
    }
}

impl<C: Component> Component for ErrorBoundary<C> {
    fn component_id(&self) -> String {
        format!("ErrorBoundary<{}>", self.child.component_id())
    }

    fn render(&self, area: Rect, frame: &mut Frame) {
        let (failure, set_failure) = use_state(|| None::<String>);

        if let Some(message) = failure.get() {
            render_fallback(&message, area, frame);
            return;
        }

        let child = self.child.clone();
        let outcome = catch_panic(AssertUnwindSafe(|| {
            child.render_with_mount(area, frame);
        }));

        if let Err(payload) = outcome {
            let message = panic_message(payload.as_ref());
            tracing::error!(target: "boundary", %message, "child render panicked");
            set_failure.set(Some(message.clone()));
            render_fallback(&message, area, frame);
        }
    }
}

fn render_fallback(message: &str, area: Rect, frame: &mut Frame) {
    let lines = vec![
        Line::from("Something went wrong."),
        Line::from(message.to_string()),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(Color::Red))
            .block(Block::default().borders(Borders::ALL).title("Error")),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{GLOBALS_LOCK, Harness};
    use std::sync::atomic::{AtomicUsize, Ordering};

    static THROWING_RENDERS: AtomicUsize = AtomicUsize::new(0);

    #[derive(Clone)]
    struct ThrowingChild;

    impl Component for ThrowingChild {
        fn render(&self, _area: Rect, _frame: &mut Frame) {
            THROWING_RENDERS.fetch_add(1, Ordering::SeqCst);
            panic!("Test Error");
        }
    }

    #[derive(Clone)]
    struct QuietChild;

    impl Component for QuietChild {
        fn render(&self, area: Rect, frame: &mut Frame) {
            frame.render_widget(Paragraph::new("all good"), area);
        }
    }

    #[test]
    fn test_well_behaved_child_renders_through() {
        let _lock = GLOBALS_LOCK.lock();
        let mut harness = Harness::new(30, 4);
        harness.draw(&ErrorBoundary::new(QuietChild));

        let text = harness.text();
        assert!(text.contains("all good"));
        assert!(!text.contains("Something went wrong"));
    }

    #[test]
    fn test_child_panic_is_contained_and_reported() {
        let _lock = GLOBALS_LOCK.lock();
        THROWING_RENDERS.store(0, Ordering::SeqCst);
        let mut harness = Harness::new(40, 4);
        harness.draw(&ErrorBoundary::new(ThrowingChild));

        let text = harness.text();
        assert!(text.contains("Something went wrong."));
        assert!(text.contains("Test Error"));
        assert_eq!(THROWING_RENDERS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_latches_and_skips_the_child() {
        let _lock = GLOBALS_LOCK.lock();
        THROWING_RENDERS.store(0, Ordering::SeqCst);
        let mut harness = Harness::new(40, 4);
        let boundary = ErrorBoundary::new(ThrowingChild);

        harness.draw(&boundary);
        harness.draw(&boundary);
        harness.draw(&boundary);

        // One failed attempt; later frames render the fallback directly
        assert_eq!(THROWING_RENDERS.load(Ordering::SeqCst), 1);
        assert!(harness.text().contains("Something went wrong."));
    }
}
