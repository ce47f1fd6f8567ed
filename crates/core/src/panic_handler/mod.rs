//! Panic reporting and the logging bootstrap.
//!
//! Debug builds install `better_panic` for full backtraces; release builds
//! install `human_panic` so end users get a friendly report file instead of
//! a stack dump. Either way the panic is logged through `tracing` first,
//! with a stderr layer for development and a daily-rolling JSON file for
//! later inspection.

use std::any::Any;
use std::io::{self, Write};
use std::panic;
use std::sync::{Once, OnceLock};
use tokio::task::JoinHandle;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    Registry,
    filter::{EnvFilter, LevelFilter},
    fmt,
    prelude::*,
    util::SubscriberInitExt,
};

#[cfg(debug_assertions)]
use better_panic::{Settings, Verbosity};

#[cfg(not(debug_assertions))]
use human_panic::setup_panic;

static INIT: Once = Once::new();
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the tracing subscriber and the panic hook. Idempotent; only the
/// first call does anything.
pub fn setup_panic_handler() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::from_default_env().add_directive(LevelFilter::INFO.into());
        let console_layer = fmt::Layer::new().with_writer(io::stderr);

        let file_appender = tracing_appender::rolling::daily("logs", "weft.log");
        let (non_blocking_appender, guard) = tracing_appender::non_blocking(file_appender);
        let _ = LOG_GUARD.set(guard);
        let file_layer = fmt::Layer::new().with_writer(non_blocking_appender).json();

        Registry::default()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .init();

        #[cfg(debug_assertions)]
        {
            Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(Verbosity::Full)
                .install();
            info!("panic handler configured for debug builds (better_panic)");
        }

        #[cfg(not(debug_assertions))]
        {
            setup_panic!();
            info!("panic handler configured for release builds (human_panic)");
        }

        // Log through tracing before the profile-specific reporter runs
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            error!(
                target: "panic_handler",
                location = %panic_info
                    .location()
                    .map_or("unknown".to_string(), |l| format!("{}:{}:{}", l.file(), l.line(), l.column())),
                payload = %panic_info.payload().downcast_ref::<&str>().unwrap_or(&"<unknown>"),
                "application panicked"
            );
            original_hook(panic_info);
            let _ = io::stderr().flush();
        }));
    });
}

/// Spawn a tokio task whose panic is routed through the panic hook instead
/// of being swallowed by the task boundary
pub fn spawn_catch_panic<F>(future: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    tokio::spawn(async move {
        match panic::catch_unwind(panic::AssertUnwindSafe(|| future)) {
            Ok(created) => created.await,
            Err(payload) => panic::resume_unwind(payload),
        }
    })
}

/// Run a closure, turning a panic into an `Err` carrying the payload
pub fn catch_panic<T, F>(f: F) -> Result<T, Box<dyn Any + Send + 'static>>
where
    F: FnOnce() -> T + panic::UnwindSafe,
{
    panic::catch_unwind(f)
}

/// Render a panic payload as text, for logging and fallback views
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "<non-string panic payload>".to_string()
    }
}
