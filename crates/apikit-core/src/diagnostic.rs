//! Error formatter.
//!
//! Turns a failure into a [`DiagnosticRecord`]: an ordered capture of the
//! failure context that renders to a human-readable, multi-line string.
//!
//! # Layout
//!
//! Sections are emitted in a fixed order, separated by blank lines:
//!
//! ```text
//! project: billing
//!
//! task: nightly-sync
//!
//! args: ["a",1]
//!
//! kwargs: {"retry":true}
//!
//! exception: connection refused
//!
//! traceback: <backtrace, possibly empty>
//!
//! time: 2024-01-31 12:00:00
//! ```
//!
//! `task` is omitted when absent. Every other label, `exception` and
//! `traceback` included, is always present.

use std::backtrace::BacktraceStatus;
use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Timestamp layout used for the `time` section (local clock).
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticRecord {
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    pub args: Vec<Value>,
    pub kwargs: BTreeMap<String, Value>,
    pub exception: String,
    pub traceback: String,
    pub time: String,
}

impl DiagnosticRecord {
    pub fn new(exception: impl Into<String>) -> Self {
        Self {
            project: None,
            task: None,
            args: Vec::new(),
            kwargs: BTreeMap::new(),
            exception: exception.into(),
            traceback: String::new(),
            time: chrono::Local::now().format(TIME_FORMAT).to_string(),
        }
    }

    /// Captures `err` with its cause chain and, when one was recorded, its backtrace.
    pub fn from_error(err: &anyhow::Error) -> Self {
        let backtrace = err.backtrace();
        let traceback = match backtrace.status() {
            BacktraceStatus::Captured => backtrace.to_string(),
            _ => String::new(),
        };

        Self::new(format!("{err:#}")).traceback(traceback)
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn task(mut self, task: impl Into<String>) -> Self {
        self.task = Some(task.into());
        self
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.insert(key.into(), value.into());
        self
    }

    pub fn traceback(mut self, traceback: impl Into<String>) -> Self {
        self.traceback = traceback.into();
        self
    }

    /// Labelled sections in render order.
    pub fn entries(&self) -> Result<Vec<(&'static str, String)>, serde_json::Error> {
        let mut entries = Vec::with_capacity(7);

        entries.push(("project", self.project.clone().unwrap_or_default()));
        if let Some(task) = &self.task {
            entries.push(("task", task.clone()));
        }
        entries.push(("args", serde_json::to_string(&self.args)?));
        entries.push(("kwargs", serde_json::to_string(&self.kwargs)?));
        entries.push(("exception", self.exception.clone()));
        entries.push(("traceback", self.traceback.clone()));
        entries.push(("time", self.time.clone()));

        Ok(entries)
    }

    pub fn render(&self) -> Result<String, serde_json::Error> {
        Ok(self
            .entries()?
            .into_iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join("\n\n"))
    }

    /// Renders the record, or returns `fallback` if rendering fails.
    pub fn render_or_plain(&self, fallback: &str) -> String {
        match self.render() {
            Ok(rendered) => rendered,
            Err(err) => {
                tracing::warn!(error = %err, "failed to render diagnostic record");
                fallback.to_string()
            }
        }
    }
}

/// Formats `err` with optional labels and free-form context.
///
/// Returns both the rendered string and the record it was rendered from.
pub fn exception_to_string(
    err: &anyhow::Error,
    project: Option<&str>,
    task: Option<&str>,
    args: Vec<Value>,
    kwargs: BTreeMap<String, Value>,
) -> (String, DiagnosticRecord) {
    let mut record = DiagnosticRecord::from_error(err);
    record.project = project.map(str::to_string);
    record.task = task.filter(|t| !t.is_empty()).map(str::to_string);
    record.args = args;
    record.kwargs = kwargs;

    let rendered = record.render_or_plain(&err.to_string());
    (rendered, record)
}
