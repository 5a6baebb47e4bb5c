//! Structured log records for the test run's report.
//!
//! The report sink is an observability seam only; nothing in the helpers
//! branches on what a sink does with a record.

use serde_json::Value;
use std::fmt;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{fmt as tracing_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type Detail = Box<dyn FnOnce() -> Value + Send>;

/// One structured record handed to the log sink.
///
/// The diagnostic `detail` payload is computed lazily: sinks that do not
/// render it never pay for it.
pub struct LogRecord {
    /// Machine name of the originating helper ("dispatch", "seeded_visit").
    pub name: &'static str,

    /// Display label for the report UI.
    pub label: &'static str,

    /// Short human-readable message.
    pub message: String,

    detail: Detail,
}

impl LogRecord {
    /// Build a record with a lazily computed detail payload.
    pub fn new(
        name: &'static str,
        label: &'static str,
        message: impl Into<String>,
        detail: impl FnOnce() -> Value + Send + 'static,
    ) -> Self {
        Self {
            name,
            label,
            message: message.into(),
            detail: Box::new(detail),
        }
    }

    /// Compute the diagnostic payload, consuming the record.
    pub fn detail(self) -> Value {
        (self.detail)()
    }
}

impl fmt::Debug for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRecord")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Destination for log records, rendered into the test run's report.
pub trait LogSink {
    /// Accept one record.
    fn record(&self, record: LogRecord);
}

/// Default sink: forwards records to `tracing`.
///
/// The detail payload is only computed when the DEBUG level is enabled for
/// this crate's target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn record(&self, record: LogRecord) {
        if tracing::enabled!(tracing::Level::DEBUG) {
            let (helper, label, message) = (record.name, record.label, record.message.clone());
            let detail = record.detail();
            tracing::debug!(helper, label, detail = %detail, "{}", message);
        } else {
            tracing::info!(helper = record.name, label = record.label, "{}", record.message);
        }
    }
}

/// A record captured by [`MemorySink`], detail already computed.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRecord {
    /// Machine name of the originating helper.
    pub name: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Short message.
    pub message: String,
    /// The computed detail payload.
    pub detail: Value,
}

/// Capturing sink for tests.
///
/// Clones share the same backing buffer, so a harness can own one clone
/// while the test inspects another.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records captured so far.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.lock().clone()
    }

    /// Number of records captured so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<CapturedRecord>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl LogSink for MemorySink {
    fn record(&self, record: LogRecord) {
        let name = record.name;
        let label = record.label;
        let message = record.message.clone();
        let detail = record.detail();
        self.lock().push(CapturedRecord {
            name,
            label,
            message,
            detail,
        });
    }
}

/// Initialize an env-filtered subscriber for dev diagnostics in test runs.
///
/// Reads `RUST_LOG`; defaults to `warn` if unset. Output goes to stderr.
/// Safe to call from multiple tests; only the first call installs.
pub fn init_diagnostics() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .ok();
}
