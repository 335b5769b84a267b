//! Last line of defense for handlers that panic.
//!
//! [`install_panic_hook`] logs every panic and stashes its trace in a
//! thread-local slot. `CatchPanicLayer` calls [`handle_panic`] on the same
//! thread right after unwinding, which turns the panic into the standard
//! 500 envelope with the trace as the `traceback` section.

use std::any::Any;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::cell::RefCell;
use std::panic;

use axum::response::{IntoResponse, Response};

use apikit_core::{AppError, DiagnosticRecord};

thread_local! {
    static LAST_PANIC_TRACE: RefCell<Option<String>> = const { RefCell::new(None) };
}

pub fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let backtrace = Backtrace::capture();
        let trace = match backtrace.status() {
            BacktraceStatus::Captured => backtrace.to_string(),
            _ => info
                .location()
                .map(|location| format!("at {location}"))
                .unwrap_or_default(),
        };

        tracing::error!(panic = %info, "panic");

        LAST_PANIC_TRACE.with(|slot| *slot.borrow_mut() = Some(trace));
    }));
}

/// Response for a panic caught by `CatchPanicLayer`. Never panics itself.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic_message(&*err);
    let traceback = LAST_PANIC_TRACE
        .with(|slot| slot.borrow_mut().take())
        .unwrap_or_default();

    let detail = DiagnosticRecord::new(message.clone())
        .traceback(traceback)
        .render_or_plain(&message);

    AppError::Internal { detail }.into_response()
}

fn panic_message(err: &(dyn Any + Send)) -> String {
    if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "handler panicked".to_string()
    }
}
