mod renderer;
mod terminal;
pub use renderer::{draw_element, render_once, run};
pub use terminal::{ManagedTerminal, restore_terminal, setup_terminal};

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Frame, Terminal, backend::TestBackend, layout::Rect, widgets::Paragraph};
    use std::rc::Rc;
    use weft_core::hooks::HookContext;
    use weft_core::hooks::counter::{CounterConfig, use_counter};
    use weft_core::hooks::event::use_key_handler;
    use weft_core::hooks::state::use_state;
    use weft_core::{Component, clear_global_handlers, process_global_event, take_redraw};

    // The key registry and redraw flag are process globals; tests that
    // touch them take this lock so parallel test threads stay out of each
    // other's registrations.
    static GLOBALS_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[derive(Clone)]
    struct CountView;

    impl Component for CountView {
        fn render(&self, area: Rect, frame: &mut Frame) {
            let counter = use_counter(CounterConfig::default());
            {
                let counter = counter.clone();
                use_key_handler(KeyCode::Char('+'), move || {
                    counter.increment();
                    true
                });
            }
            {
                let counter = counter.clone();
                use_key_handler(KeyCode::Char('-'), move || {
                    counter.decrement();
                    true
                });
            }
            frame.render_widget(Paragraph::new(format!("count: {}", counter.count())), area);
        }
    }

    #[derive(Clone)]
    struct TwoHookView;

    impl Component for TwoHookView {
        fn render(&self, area: Rect, frame: &mut Frame) {
            let (name, _) = use_state(|| "weft".to_string());
            let (frames, set_frames) = use_state(|| 0u32);
            set_frames.update(|prev| prev + 1);
            frame.render_widget(
                Paragraph::new(format!("{} frame {}", name.get(), frames.get())),
                area,
            );
        }
    }

    #[test]
    fn test_draw_element_renders_hook_state() {
        let _lock = GLOBALS_LOCK.lock().unwrap();
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        let context = Rc::new(HookContext::new());
        let view = CountView;

        clear_global_handlers();
        draw_element(&mut terminal, &view, &context).unwrap();
        assert!(buffer_text(&terminal).contains("count: 0"));
        clear_global_handlers();
    }

    #[test]
    fn test_key_event_mutation_reaches_the_next_frame() {
        let _lock = GLOBALS_LOCK.lock().unwrap();
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        let context = Rc::new(HookContext::new());
        let view = CountView;

        clear_global_handlers();
        draw_element(&mut terminal, &view, &context).unwrap();

        // Drain any redraw raised during the first draw, then fire '+'
        take_redraw();
        let plus = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE);
        assert!(process_global_event(&plus));

        // The mutation scheduled a redraw; drawing again shows the new count
        assert!(take_redraw());
        draw_element(&mut terminal, &view, &context).unwrap();
        assert!(buffer_text(&terminal).contains("count: 1"));

        let minus = KeyEvent::new(KeyCode::Char('-'), KeyModifiers::NONE);
        assert!(process_global_event(&minus));
        draw_element(&mut terminal, &view, &context).unwrap();
        assert!(buffer_text(&terminal).contains("count: 0"));
        clear_global_handlers();
    }

    #[test]
    fn test_hook_slots_stay_positional_across_frames() {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        let context = Rc::new(HookContext::new());
        let view = TwoHookView;

        draw_element(&mut terminal, &view, &context).unwrap();
        draw_element(&mut terminal, &view, &context).unwrap();
        draw_element(&mut terminal, &view, &context).unwrap();

        // The name slot kept its value while the frame slot advanced
        assert!(buffer_text(&terminal).contains("weft frame 3"));
    }

    #[test]
    fn test_handlers_register_once_across_frames() {
        let _lock = GLOBALS_LOCK.lock().unwrap();
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        let context = Rc::new(HookContext::new());
        let view = CountView;

        clear_global_handlers();
        for _ in 0..4 {
            draw_element(&mut terminal, &view, &context).unwrap();
        }

        // Were a handler registered per frame, one press would add 4
        let plus = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE);
        process_global_event(&plus);
        draw_element(&mut terminal, &view, &context).unwrap();
        assert!(buffer_text(&terminal).contains("count: 1"));
        clear_global_handlers();
    }
}
