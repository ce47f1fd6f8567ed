//! A button that takes its colors from the ambient theme.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
};
use weft_core::Component;
use weft_core::hooks::callback::Callback;
use weft_core::hooks::context::use_context_with_default;

use crate::theme::Theme;

/// Button styled by the [`Theme`] provided by an ancestor; with no provider
/// it renders in the light palette
#[derive(Clone)]
pub struct ThemedButton {
    label: String,
    on_press: Callback<()>,
}

impl ThemedButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_press: Callback::noop(),
        }
    }

    pub fn on_press(mut self, on_press: Callback<()>) -> Self {
        self.on_press = on_press;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Emit the press callback
    pub fn press(&self) {
        self.on_press.emit(());
    }
}

impl Component for ThemedButton {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let theme: Theme = use_context_with_default();
        let widget = Paragraph::new(self.label.clone())
            .style(theme.style())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).style(theme.style()));
        frame.render_widget(widget, area);
    }

    fn component_id(&self) -> String {
        format!("ThemedButton:{}", self.label)
    }
}
