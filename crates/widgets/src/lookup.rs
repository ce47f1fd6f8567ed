//! Fetch-on-demand lookup: Enter pulls a record and shows one field of it.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};
use serde_json::Value;
use weft_core::Component;
use weft_core::api::{ApiError, SharedApiClient};
use weft_core::hooks::event::use_key_handler;
use weft_core::hooks::request::{RequestState, use_request};
use weft_core::hooks::state::use_state;

/// Pull the user name out of a `{ "data": { "UserName": ... } }` body
fn user_name(body: &Value) -> Result<String, ApiError> {
    body.pointer("/data/UserName")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ApiError::Decode("response has no data.UserName field".to_string()))
}

/// Fetches `url` on Enter and renders the `data.UserName` field of the
/// response
#[derive(Clone)]
pub struct UserLookup {
    client: SharedApiClient,
    url: String,
}

impl UserLookup {
    pub fn new(client: SharedApiClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl Component for UserLookup {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let (label, _) = use_state(|| "user".to_string());
        let request = use_request::<String, ApiError>();

        {
            let request = request.clone();
            let client = self.client.clone();
            let url = self.url.clone();
            use_key_handler(KeyCode::Enter, move || {
                if request.is_pending() {
                    return true;
                }
                let client = client.clone();
                let url = url.clone();
                request.launch(async move {
                    let body = client.get_json(&url).await?;
                    user_name(&body)
                });
                true
            });
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        frame.render_widget(Paragraph::new("Press Enter to fetch"), chunks[0]);

        let row = match request.state() {
            RequestState::Idle => Paragraph::new(format!("{}: -", label.get())),
            RequestState::Pending => Paragraph::new("loading..."),
            RequestState::Resolved(user) => Paragraph::new(format!("{}: {}", label.get(), user)),
            RequestState::Error(error) => {
                Paragraph::new(error.to_string()).style(Style::default().fg(Color::Red))
            }
        };
        frame.render_widget(row, chunks[1]);
    }
}
