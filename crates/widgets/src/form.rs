//! A two-field form that posts its payload and redirects on success.
//!
//! The HTTP collaborator is injected, so tests substitute a recording mock;
//! the submission timestamp is passed in explicitly for the same reason.

use chrono::{DateTime, Utc};
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use serde::Serialize;
use serde_json::Value;
use weft_core::Component;
use weft_core::api::{ApiError, SharedApiClient};
use weft_core::hooks::callback::Callback;
use weft_core::hooks::event::use_key_capture;
use weft_core::hooks::request::use_request;
use weft_core::hooks::state::use_state;

/// Payload posted on submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub name: String,
    pub age: String,
    pub date: String,
}

impl Registration {
    pub fn new(
        name: impl Into<String>,
        age: impl Into<String>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            date: submitted_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Age,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Field::Name => Field::Age,
            Field::Age => Field::Name,
        }
    }
}

/// Name/age form. Tab switches fields, Enter submits; the button is
/// disabled while a submission is in flight, and a successful post flips
/// the redirect view and emits `on_saved`.
#[derive(Clone)]
pub struct RegistrationForm {
    client: SharedApiClient,
    action_url: String,
    on_saved: Callback<()>,
}

impl RegistrationForm {
    pub fn new(client: SharedApiClient, action_url: impl Into<String>) -> Self {
        Self {
            client,
            action_url: action_url.into(),
            on_saved: Callback::noop(),
        }
    }

    pub fn on_saved(mut self, on_saved: Callback<()>) -> Self {
        self.on_saved = on_saved;
        self
    }
}

fn field_row(label: &str, value: &str, focused: bool) -> Paragraph<'static> {
    let marker = if focused { ">" } else { " " };
    let mut style = Style::default();
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }
    Paragraph::new(format!("{marker} {label}: {value}")).style(style)
}

impl Component for RegistrationForm {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let (name, set_name) = use_state(String::new);
        let (age, set_age) = use_state(String::new);
        let (focus, set_focus) = use_state(|| Field::Name);
        let request = use_request::<Value, ApiError>();

        {
            let name = name.clone();
            let age = age.clone();
            let focus = focus.clone();
            let request = request.clone();
            let client = self.client.clone();
            let action_url = self.action_url.clone();
            let on_saved = self.on_saved.clone();

            use_key_capture(move |event| match event.code {
                KeyCode::Tab => {
                    set_focus.update(|prev| prev.next());
                    true
                }
                KeyCode::Enter => {
                    // Disabled while saving, and a finished form stays put
                    if request.is_pending() || request.state().is_resolved() {
                        return true;
                    }
                    let payload = Registration::new(name.get(), age.get(), Utc::now());
                    let body =
                        serde_json::to_value(&payload).expect("registration payload serializes");
                    let client = client.clone();
                    let url = action_url.clone();
                    let on_saved = on_saved.clone();
                    request.launch(async move {
                        let response = client.post_json(&url, &body).await?;
                        on_saved.emit(());
                        Ok(response)
                    });
                    true
                }
                KeyCode::Char(c) => {
                    let setter = match focus.get() {
                        Field::Name => &set_name,
                        Field::Age => &set_age,
                    };
                    setter.update(|prev| {
                        let mut next = prev.clone();
                        next.push(c);
                        next
                    });
                    true
                }
                KeyCode::Backspace => {
                    let setter = match focus.get() {
                        Field::Name => &set_name,
                        Field::Age => &set_age,
                    };
                    setter.update(|prev| {
                        let mut next = prev.clone();
                        next.pop();
                        next
                    });
                    true
                }
                _ => false,
            });
        }

        let state = request.state();
        if state.is_resolved() {
            frame.render_widget(
                Paragraph::new("Saved. Redirecting to /")
                    .style(Style::default().fg(Color::Green))
                    .block(Block::default().borders(Borders::ALL).title("Registration")),
                area,
            );
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // name
                Constraint::Length(1), // age
                Constraint::Length(1), // submit
                Constraint::Length(1), // error
                Constraint::Min(0),
            ])
            .split(area);

        let focused = focus.get();
        frame.render_widget(
            field_row("Name", &name.get(), focused == Field::Name),
            chunks[0],
        );
        frame.render_widget(
            field_row("Age", &age.get(), focused == Field::Age),
            chunks[1],
        );

        let submit_label = if state.is_pending() {
            "[ Saving... ]"
        } else {
            "[ Submit ]"
        };
        frame.render_widget(Paragraph::new(submit_label), chunks[2]);

        if let Some(error) = state.error() {
            frame.render_widget(
                Paragraph::new(error.to_string()).style(Style::default().fg(Color::Red)),
                chunks[3],
            );
        }
    }
}
