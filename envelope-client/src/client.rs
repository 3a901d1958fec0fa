// envelope-client/src/client.rs
use std::future::Future;
use std::sync::Arc;

use futures::future::try_join_all;
use serde_json::Value;

use crate::envelope::{ResponseEnvelope, STATUS_AUTH_REJECTED, STATUS_OK};
use crate::error::ApiError;
use crate::http::{HttpTransport, TransportError};
use crate::report::{DiagnosticSink, Reporter, StderrSink};
use crate::request::{self, Payload, Verb};

/// The dispatcher: one call surface over the four verbs, envelope
/// interpretation, and centralized failure logging.
///
/// Each verb builds a request descriptor, hands it to the transport
/// collaborator, and interprets the decoded envelope. Only application
/// errors reach the caller as `Err`; authentication rejections and
/// transport failures resolve to `Ok(None)` after logging, matching the
/// backend contract this layer wraps.
pub struct Client<T: HttpTransport> {
    transport: T,
    reporter: Reporter,
}

impl<T: HttpTransport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            reporter: Reporter::new(Arc::new(StderrSink)),
        }
    }

    /// Replace the default stderr diagnostics. Construction-time only; the
    /// sink cannot change once calls are in flight.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.reporter = Reporter::new(sink);
        self
    }

    pub async fn read(&self, url: &str, payload: Payload) -> Result<Option<Value>, ApiError> {
        self.dispatch(Verb::Read, url, payload).await
    }

    pub async fn create(&self, url: &str, payload: Payload) -> Result<Option<Value>, ApiError> {
        self.dispatch(Verb::Create, url, payload).await
    }

    pub async fn replace(&self, url: &str, payload: Payload) -> Result<Option<Value>, ApiError> {
        self.dispatch(Verb::Replace, url, payload).await
    }

    pub async fn remove(&self, url: &str, payload: Payload) -> Result<Option<Value>, ApiError> {
        self.dispatch(Verb::Remove, url, payload).await
    }

    /// Await a batch of calls concurrently. Results come back in input
    /// order; the first failure is logged and returned, with no partial
    /// results.
    pub async fn batch_await<R, F>(
        &self,
        calls: impl IntoIterator<Item = F>,
    ) -> Result<Vec<R>, ApiError>
    where
        F: Future<Output = Result<R, ApiError>>,
    {
        match try_join_all(calls).await {
            Ok(results) => Ok(results),
            Err(error) => {
                self.reporter.batch_failure(&error);
                Err(error)
            }
        }
    }

    async fn dispatch(
        &self,
        verb: Verb,
        url: &str,
        payload: Payload,
    ) -> Result<Option<Value>, ApiError> {
        let descriptor = request::build(verb, payload);
        let outcome = self.transport.execute(url, &descriptor).await;
        self.interpret(outcome)
    }

    /// Classify the transport outcome per the backend contract: inner
    /// status 200 resolves with the envelope payload, 403 and transport
    /// failures are absorbed after logging, anything else surfaces as an
    /// `ApiError`.
    fn interpret(
        &self,
        outcome: Result<ResponseEnvelope, TransportError>,
    ) -> Result<Option<Value>, ApiError> {
        match outcome {
            Ok(envelope) if envelope.status == STATUS_OK => Ok(envelope.data),
            Ok(envelope) if envelope.status == STATUS_AUTH_REJECTED => Ok(None),
            Ok(envelope) => {
                self.reporter.status_failure(envelope.status);
                Err(ApiError {
                    status: envelope.status,
                    message: envelope.message.unwrap_or_default(),
                })
            }
            Err(error) => {
                self.reporter.transport_failure(&error);
                Ok(None)
            }
        }
    }
}
