//! Shared plumbing for widget tests: a TestBackend render harness driving
//! real render cycles, key-event helpers, and a recording API client (the
//! injected stand-in for network mocking).

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parking_lot::Mutex;
use ratatui::{Terminal, backend::TestBackend};
use serde_json::Value;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use weft_core::api::{ApiClient, ApiError};
use weft_core::hooks::HookContext;
use weft_core::{Component, clear_global_handlers, process_global_event};
use weft_runtime::draw_element;

// The key registry and redraw flag are process globals; every test that
// registers handlers or fires events must hold this.
pub static GLOBALS_LOCK: Mutex<()> = Mutex::new(());

/// A terminal-free host: one hook context plus a TestBackend, driven through
/// the same render cycle the runtime loop uses
pub struct Harness {
    terminal: Terminal<TestBackend>,
    context: Rc<HookContext>,
}

impl Harness {
    pub fn new(width: u16, height: u16) -> Self {
        clear_global_handlers();
        Self {
            terminal: Terminal::new(TestBackend::new(width, height)).unwrap(),
            context: Rc::new(HookContext::new()),
        }
    }

    /// Run one render cycle
    pub fn draw<T: Component>(&mut self, view: &T) {
        draw_element(&mut self.terminal, view, &self.context).unwrap();
    }

    /// The rendered frame as plain text, row by row
    pub fn text(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    /// Style of the cell at (x, y), for theme assertions
    pub fn style_at(&self, x: u16, y: u16) -> ratatui::style::Style {
        self.terminal.backend().buffer()[(x, y)].style()
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        clear_global_handlers();
    }
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn press_key(code: KeyCode) -> bool {
    process_global_event(&press(code))
}

pub fn type_str(text: &str) {
    for c in text.chars() {
        press_key(KeyCode::Char(c));
    }
}

/// One recorded call against the mock client
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
}

enum Scripted {
    Reply(Result<Value, ApiError>),
    Stall,
}

/// Recording [`ApiClient`]: replies come from a scripted queue, every call
/// is captured for assertions
pub struct MockApiClient {
    script: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockApiClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn reply_ok(self: &Arc<Self>, value: Value) -> Arc<Self> {
        self.script.lock().push_back(Scripted::Reply(Ok(value)));
        self.clone()
    }

    pub fn reply_err(self: &Arc<Self>, error: ApiError) -> Arc<Self> {
        self.script.lock().push_back(Scripted::Reply(Err(error)));
        self.clone()
    }

    /// The next call records itself and then never completes
    pub fn stall_next(self: &Arc<Self>) -> Arc<Self> {
        self.script.lock().push_back(Scripted::Stall);
        self.clone()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    async fn respond(&self, call: RecordedCall) -> Result<Value, ApiError> {
        self.calls.lock().push(call);
        let next = self.script.lock().pop_front();
        match next {
            Some(Scripted::Reply(reply)) => reply,
            Some(Scripted::Stall) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                unreachable!("stalled call should have been aborted")
            }
            None => Ok(Value::Null),
        }
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        self.respond(RecordedCall {
            method: "GET",
            url: url.to_string(),
            body: None,
        })
        .await
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, ApiError> {
        self.respond(RecordedCall {
            method: "POST",
            url: url.to_string(),
            body: Some(body.clone()),
        })
        .await
    }
}
