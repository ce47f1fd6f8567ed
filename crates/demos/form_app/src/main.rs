use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::Paragraph;
use std::error::Error;
use std::sync::Arc;
use weft::prelude::*;
use weft::widgets::boundary::ErrorBoundary;
use weft::widgets::form::RegistrationForm;
use weft::widgets::theme::Theme;

#[derive(Clone)]
struct App {
    form: ErrorBoundary<RegistrationForm>,
}

impl Component for App {
    fn render(&self, area: Rect, frame: &mut Frame) {
        use_context_provider(|| Theme::Dark);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(4)])
            .split(area);

        frame.render_widget(
            Paragraph::new("Registration (Tab switches fields, Enter submits, Esc quits)"),
            chunks[0],
        );
        self.form.render_with_mount(chunks[1], frame);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_panic_handler();

    on_global_event(KeyCode::Esc, || {
        request_exit();
        true
    });

    let client: SharedApiClient = Arc::new(HttpClient::new());
    let form = ErrorBoundary::new(RegistrationForm::new(
        client,
        "https://jsonplaceholder.typicode.com/posts",
    ));

    tokio::task::block_in_place(|| run(move || App { form: form.clone() }))
}
