//! Event and log callback system.
//!
//! Hosts register callbacks to receive diagnostics from the extractor, the
//! static pass and the live engine. Without a registered callback every emit
//! is a no-op.
//!
//! Callbacks run while the registry lock is held: a callback must not call
//! [`emit_event`], [`emit_log`] or the setters, or the thread deadlocks. A
//! panicking callback does not disable the registry; the next emit or setter
//! recovers the lock.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Event emitted after the live engine replaced its decoration set.
pub const EVENT_DECORATIONS_REBUILT: &str = "decorations.rebuilt";
/// Event emitted after the static pass rewrote a rendered container.
pub const EVENT_STATIC_PASS: &str = "static_pass.done";

type EventCallback = Box<dyn Fn(&str, &str) + Send + Sync + 'static>;
type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn event_callback() -> MutexGuard<'static, Option<EventCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<EventCallback>>> = OnceLock::new();
    CALLBACK
        .get_or_init(|| Mutex::new(None))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn log_callback() -> MutexGuard<'static, Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK
        .get_or_init(|| Mutex::new(None))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Set the global event callback.
pub fn set_event_callback<F>(callback: F)
where
    F: Fn(&str, &str) + Send + Sync + 'static,
{
    *event_callback() = Some(Box::new(callback));
}

/// Emit an event to the registered callback.
pub fn emit_event(name: &str, data: &str) {
    if let Some(callback) = event_callback().as_ref() {
        callback(name, data);
    }
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    *log_callback() = Some(Box::new(callback));
}

/// Emit a log event.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Some(callback) = log_callback().as_ref() {
        callback(level, message);
    }
}
