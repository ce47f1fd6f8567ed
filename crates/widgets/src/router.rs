//! A tiny route table: exact matches with a 404 fallback.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use weft_core::Component;
use weft_core::hooks::event::use_key_handler;
use weft_core::hooks::state::use_state;

/// Where a path lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Home,
    About,
    NotFound,
}

/// Exact-match routing; unknown paths fall through to the 404 page
pub fn resolve(path: &str) -> RouteTarget {
    match path {
        "/" => RouteTarget::Home,
        "/about" => RouteTarget::About,
        _ => RouteTarget::NotFound,
    }
}

/// Router component: holds the current path in state and switches pages on
/// `h` (home) and `a` (about)
#[derive(Debug, Clone, PartialEq)]
pub struct Router {
    initial: String,
}

impl Router {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}

fn page_lines(target: RouteTarget) -> (&'static str, &'static str) {
    match target {
        RouteTarget::Home => ("Home", "You are on Home page"),
        RouteTarget::About => ("About", "You are on About page"),
        RouteTarget::NotFound => ("404", "File not found"),
    }
}

impl Component for Router {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let (path, set_path) = use_state(|| self.initial.clone());

        {
            let set_path = set_path.clone();
            use_key_handler(KeyCode::Char('h'), move || {
                set_path.set("/".to_string());
                true
            });
        }
        {
            let set_path = set_path.clone();
            use_key_handler(KeyCode::Char('a'), move || {
                set_path.set("/about".to_string());
                true
            });
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // nav
                Constraint::Length(1), // title
                Constraint::Min(1),    // body
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new("[h] Home  [a] About").style(Style::default().fg(Color::Cyan)),
            chunks[0],
        );

        let (title, body) = page_lines(resolve(&path.get()));
        frame.render_widget(
            Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD)),
            chunks[1],
        );
        frame.render_widget(Paragraph::new(body), chunks[2]);
    }
}
