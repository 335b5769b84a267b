use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::fs;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use apikit_config::Settings;

/// Logs each request with a fresh `request_id`, at a level chosen by status class.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| req.uri().path().to_owned());
    let request_id = Uuid::new_v4();

    debug!(%request_id, %method, %path, "Incoming request");

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    match status {
        500..=599 => error!(%request_id, %method, %path, status, latency_ms, "Server error"),
        400..=499 => warn!(%request_id, %method, %path, status, latency_ms, "Client error"),
        _ => info!(%request_id, %method, %path, status, latency_ms, "Request completed"),
    }

    response
}

/// Console logging, plus a daily rolling error log when `LOG_DIR` is set.
///
/// `RUST_LOG` overrides the default filter, which is `info` (`debug` when
/// `DEBUG` is on) with noisy HTTP internals held at `warn`.
pub fn init_tracing(settings: &Settings) {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(settings.debug)));

    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(console_filter);

    let file_layer = settings
        .log_dir
        .as_deref()
        .and_then(error_file_appender)
        .map(|file_appender| {
            fmt::layer()
                .with_writer(file_appender)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_filter(EnvFilter::new("error"))
        });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    format!("{level},tower_http=warn,hyper=warn")
}

// Runs before the subscriber exists, so failures go to stderr.
fn error_file_appender(log_dir: &str) -> Option<RollingFileAppender> {
    if let Err(err) = fs::create_dir_all(log_dir) {
        eprintln!("cannot create log directory {log_dir}: {err}");
        return None;
    }

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("apikit.log")
        .build(log_dir)
        .inspect_err(|err| eprintln!("cannot open log file in {log_dir}: {err}"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_follows_debug_flag() {
        assert_eq!(default_filter(false), "info,tower_http=warn,hyper=warn");
        assert_eq!(default_filter(true), "debug,tower_http=warn,hyper=warn");
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(default_filter(false)).is_ok());
    }
}
