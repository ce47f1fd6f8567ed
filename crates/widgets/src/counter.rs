//! The counter panel: the counter hook wired to keys and a status line.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use weft_core::Component;
use weft_core::hooks::counter::{CounterConfig, use_counter};
use weft_core::hooks::event::use_key_handler;

/// Counter widget: `+` and `-` move the count by the configured step
#[derive(Debug, Clone, PartialEq)]
pub struct CounterPanel {
    config: CounterConfig,
}

impl CounterPanel {
    pub fn new(config: CounterConfig) -> Self {
        Self { config }
    }
}

impl Default for CounterPanel {
    fn default() -> Self {
        Self::new(CounterConfig::default())
    }
}

fn status_word(count: i64) -> &'static str {
    if count == 0 {
        "Zero"
    } else if count > 0 {
        "Positive"
    } else {
        "Negative"
    }
}

impl Component for CounterPanel {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let counter = use_counter(self.config);

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

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // value + status
                Constraint::Length(3), // controls
                Constraint::Min(0),
            ])
            .split(area);

        let count = counter.count();
        let value_lines = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                format!("Count: {count}"),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(vec![
                Span::from("Status: "),
                Span::styled(status_word(count), Style::default().fg(Color::Yellow)),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(value_lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Counter")),
            chunks[0],
        );

        let controls = Paragraph::new(format!(
            "'+' up, '-' down (step {})",
            counter.step()
        ))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
        frame.render_widget(controls, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{GLOBALS_LOCK, Harness, press_key};

    #[test]
    fn test_status_word_covers_all_signs() {
        assert_eq!(status_word(0), "Zero");
        assert_eq!(status_word(3), "Positive");
        assert_eq!(status_word(-1), "Negative");
    }

    #[test]
    fn test_first_frame_shows_the_initial_count() {
        let _lock = GLOBALS_LOCK.lock();
        let mut harness = Harness::new(40, 10);
        harness.draw(&CounterPanel::default());

        let text = harness.text();
        assert!(text.contains("Count: 0"));
        assert!(text.contains("Status: Zero"));
        assert!(text.contains("step 1"));
    }

    #[test]
    fn test_plus_and_minus_keys_drive_the_count() {
        let _lock = GLOBALS_LOCK.lock();
        let mut harness = Harness::new(40, 10);
        let panel = CounterPanel::default();
        harness.draw(&panel);

        assert!(press_key(KeyCode::Char('+')));
        harness.draw(&panel);
        assert!(harness.text().contains("Count: 1"));
        assert!(harness.text().contains("Status: Positive"));

        press_key(KeyCode::Char('-'));
        press_key(KeyCode::Char('-'));
        harness.draw(&panel);
        assert!(harness.text().contains("Count: -1"));
        assert!(harness.text().contains("Status: Negative"));
    }

    #[test]
    fn test_configured_step_is_applied_and_shown() {
        let _lock = GLOBALS_LOCK.lock();
        let mut harness = Harness::new(40, 10);
        let panel = CounterPanel::new(CounterConfig::default().initial_count(2).step(2));
        harness.draw(&panel);

        let text = harness.text();
        assert!(text.contains("Count: 2"));
        assert!(text.contains("step 2"));

        press_key(KeyCode::Char('+'));
        harness.draw(&panel);
        assert!(harness.text().contains("Count: 4"));
    }
}
