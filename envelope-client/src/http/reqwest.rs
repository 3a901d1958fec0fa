// envelope-client/src/http/reqwest.rs
use async_trait::async_trait;
use serde_json::Value;

use super::{HttpTransport, ResponseParts, TransportConfig, TransportError};
use crate::envelope::ResponseEnvelope;
use crate::request::{RequestDescriptor, Verb};

/// Transport backed by a shared `reqwest::Client`.
pub struct ReqwestTransport {
    inner: ::reqwest::Client,
}

impl ReqwestTransport {
    /// Build the underlying client once from the given configuration; the
    /// configuration cannot change afterwards.
    pub fn new(config: TransportConfig) -> Result<Self, ::reqwest::Error> {
        let inner = ::reqwest::Client::builder()
            .cookie_store(config.include_credentials)
            .build()?;
        Ok(Self { inner })
    }
}

fn method_for(verb: Verb) -> ::reqwest::Method {
    match verb {
        Verb::Read => ::reqwest::Method::GET,
        Verb::Create => ::reqwest::Method::POST,
        Verb::Replace => ::reqwest::Method::PUT,
        Verb::Remove => ::reqwest::Method::DELETE,
    }
}

/// Query values are sent as their raw string form; anything non-scalar is
/// carried as its JSON text.
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(
        &self,
        url: &str,
        request: &RequestDescriptor,
    ) -> Result<ResponseEnvelope, TransportError> {
        let method = request.verb.http_method();
        let fail = |response: Option<ResponseParts>, message: String| TransportError {
            method,
            url: url.to_string(),
            response,
            message,
        };

        let mut req = self.inner.request(method_for(request.verb), url);

        if let Some(query) = &request.query {
            let pairs: Vec<(String, String)> = match query {
                Value::Object(map) => map
                    .iter()
                    .map(|(k, v)| (k.clone(), query_value(v)))
                    .collect(),
                other => {
                    return Err(fail(
                        None,
                        format!("query payload must be a JSON object, got {other}"),
                    ))
                }
            };
            req = req.query(&pairs);
        }

        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(|e| fail(None, e.to_string()))?;

        let status = resp.status();
        let parts = ResponseParts {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("").to_string(),
        };

        if !status.is_success() {
            return Err(fail(Some(parts), "non-success HTTP status".to_string()));
        }

        resp.json::<ResponseEnvelope>()
            .await
            .map_err(|e| fail(Some(parts), e.to_string()))
    }
}
