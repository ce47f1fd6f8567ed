pub use crossterm;
pub use weft_core::{
    Component, IntoElement,
    api::{ApiClient, ApiError, HttpClient, SharedApiClient},
    control::{request_exit, request_redraw},
    hooks::{
        callback::{Callback, use_callback},
        context::{use_context, use_context_provider, use_context_with_default},
        counter::{CounterConfig, CounterHandle, use_counter},
        event::{on_any_key, on_global_event, use_key_capture, use_key_handler},
        request::{RequestHandle, RequestState, use_request},
        state::{StateHandle, StateSetter, use_state},
    },
    panic_handler::setup_panic_handler,
};

pub use weft_runtime::*;

pub use weft_widgets as widgets;

pub mod prelude {
    pub use super::*;
    pub use ratatui::{self, Frame, layout::Rect};
}
