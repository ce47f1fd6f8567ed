//! A numeric input with an inline validation row.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use weft_core::Component;
use weft_core::hooks::event::use_key_capture;
use weft_core::hooks::state::use_state;

/// Single-field numeric input. Digits and a leading `-` edit the value;
/// anything that does not parse to a positive number shows the error row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberInput;

fn accepts(buffer: &str, c: char) -> bool {
    c.is_ascii_digit() || (c == '-' && buffer.is_empty())
}

fn is_valid(buffer: &str) -> bool {
    buffer.parse::<i64>().map(|value| value > 0).unwrap_or(false)
}

impl Component for NumberInput {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let (value, set_value) = use_state(String::new);

        {
            let value = value.clone();
            use_key_capture(move |event| match event.code {
                KeyCode::Char(c) if accepts(&value.get(), c) => {
                    set_value.update(|prev| {
                        let mut next = prev.clone();
                        next.push(c);
                        next
                    });
                    true
                }
                KeyCode::Backspace => {
                    set_value.update(|prev| {
                        let mut next = prev.clone();
                        next.pop();
                        next
                    });
                    true
                }
                _ => false,
            });
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let buffer = value.get();
        frame.render_widget(
            Paragraph::new(format!("> {buffer}"))
                .block(Block::default().borders(Borders::ALL).title("Amount")),
            chunks[0],
        );

        if !is_valid(&buffer) {
            frame.render_widget(
                Paragraph::new("Invalid value").style(Style::default().fg(Color::Red)),
                chunks[1],
            );
        }
    }
}
