// envelope-client/src/report.rs
use std::sync::Arc;

use crate::error::ApiError;
use crate::http::TransportError;
use crate::timestamp;

/// Receives one formatted diagnostic line per reported failure. Inject a
/// test double to capture output.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Default sink: one line per failure on stderr.
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit(&self, line: &str) {
        eprintln!("{line}");
    }
}

/// Formats failures into diagnostic lines and hands them to the sink.
pub(crate) struct Reporter {
    sink: Arc<dyn DiagnosticSink>,
}

impl Reporter {
    pub(crate) fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    /// Transport failures are absorbed by the dispatcher, so this line is
    /// the only trace they leave. A request that never produced an HTTP
    /// response has no status line to format; the attempt is abandoned and
    /// nothing is emitted.
    pub(crate) fn transport_failure(&self, error: &TransportError) {
        let Some(parts) = &error.response else {
            return;
        };
        let (origin, path) = split_origin(&error.url);
        let line = format!(
            "{}  {}: {}{}  {} ({})",
            timestamp::now(),
            error.method,
            origin,
            path,
            parts.status,
            parts.status_text,
        );
        self.sink.emit(&line);
    }

    /// Application-status failure, logged alongside the rejection handed to
    /// the caller.
    pub(crate) fn status_failure(&self, status: i64) {
        self.sink
            .emit(&format!("request failed with status {status}"));
    }

    pub(crate) fn batch_failure(&self, error: &ApiError) {
        self.sink.emit(&format!("batch call failed: {error}"));
    }
}

/// Split an absolute URL into origin and path-and-after. A URL with no
/// scheme has no origin and comes back whole on the path side.
fn split_origin(url: &str) -> (&str, &str) {
    let Some(scheme_end) = url.find("://") else {
        return ("", url);
    };
    match url[scheme_end + 3..].find('/') {
        Some(slash) => url.split_at(scheme_end + 3 + slash),
        None => (url, ""),
    }
}
