use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout};
use std::error::Error;
use weft::prelude::*;
use weft::widgets::roster::RosterPanel;
use weft::widgets::router::Router;
use weft::widgets::theme::Theme;

#[derive(Clone)]
struct App;

impl Component for App {
    fn render(&self, area: Rect, frame: &mut Frame) {
        use_context_provider(|| Theme::Light);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Router::default().render_with_mount(chunks[0], frame);
        RosterPanel.render_with_mount(chunks[1], frame);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_panic_handler();

    on_global_event(KeyCode::Char('q'), || {
        request_exit();
        true
    });

    run(|| App)
}
