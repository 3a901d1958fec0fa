// envelope-client/src/request.rs
use serde_json::{Map, Value};

/// Loosely-typed payload handed to each verb call. Any JSON object is
/// accepted; an empty payload is valid.
pub type Payload = Map<String, Value>;

/// The four logical operations this layer exposes, mapped 1:1 to HTTP
/// methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Read,
    Create,
    Replace,
    Remove,
}

/// Where a classified payload travels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Query,
    Body,
}

impl Verb {
    pub fn http_method(&self) -> &'static str {
        match self {
            Verb::Read => "GET",
            Verb::Create => "POST",
            Verb::Replace => "PUT",
            Verb::Remove => "DELETE",
        }
    }

    /// Default placement: Read/Remove route under the query string,
    /// Create/Replace carry a request body.
    pub fn placement(&self) -> Placement {
        match self {
            Verb::Read | Verb::Remove => Placement::Query,
            Verb::Create | Verb::Replace => Placement::Body,
        }
    }
}

/// A transport-ready request. Exactly one of `query`/`body` is populated
/// when the payload was classified automatically; a payload carrying an
/// explicit `params` or `data` key keeps the caller's routing verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub verb: Verb,
    pub query: Option<Value>,
    pub body: Option<Value>,
}

/// Assemble a descriptor from a verb and a raw payload.
///
/// A `params` or `data` key in the payload is an opt-out from automatic
/// classification: the `params` value becomes the query side and the `data`
/// value the body side, untouched. Remaining keys of an opted-out payload
/// have no transport meaning here and are dropped.
pub fn build(verb: Verb, mut payload: Payload) -> RequestDescriptor {
    if payload.contains_key("params") || payload.contains_key("data") {
        let query = payload.remove("params");
        let body = payload.remove("data");
        return RequestDescriptor { verb, query, body };
    }

    let wrapped = Value::Object(payload);
    match verb.placement() {
        Placement::Query => RequestDescriptor {
            verb,
            query: Some(wrapped),
            body: None,
        },
        Placement::Body => RequestDescriptor {
            verb,
            query: None,
            body: Some(wrapped),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        value.as_object().cloned().expect("test payload must be an object")
    }

    #[test]
    fn test_method_mapping() {
        assert_eq!(Verb::Read.http_method(), "GET");
        assert_eq!(Verb::Create.http_method(), "POST");
        assert_eq!(Verb::Replace.http_method(), "PUT");
        assert_eq!(Verb::Remove.http_method(), "DELETE");
    }

    #[test]
    fn test_placement_mapping() {
        assert_eq!(Verb::Read.placement(), Placement::Query);
        assert_eq!(Verb::Remove.placement(), Placement::Query);
        assert_eq!(Verb::Create.placement(), Placement::Body);
        assert_eq!(Verb::Replace.placement(), Placement::Body);
    }

    #[test]
    fn test_read_payload_routes_to_query() {
        let descriptor = build(Verb::Read, payload(json!({"page": 2})));
        assert_eq!(descriptor.query, Some(json!({"page": 2})));
        assert_eq!(descriptor.body, None);
    }

    #[test]
    fn test_create_payload_routes_to_body() {
        let descriptor = build(Verb::Create, payload(json!({"name": "ada"})));
        assert_eq!(descriptor.query, None);
        assert_eq!(descriptor.body, Some(json!({"name": "ada"})));
    }

    #[test]
    fn test_explicit_params_key_is_preserved() {
        let descriptor = build(Verb::Create, payload(json!({"params": {"id": 7}})));
        assert_eq!(descriptor.query, Some(json!({"id": 7})));
        assert_eq!(descriptor.body, None);
        assert_eq!(descriptor.verb, Verb::Create);
    }

    #[test]
    fn test_explicit_data_key_is_preserved() {
        let descriptor = build(Verb::Read, payload(json!({"data": {"name": "ada"}})));
        assert_eq!(descriptor.query, None);
        assert_eq!(descriptor.body, Some(json!({"name": "ada"})));
    }

    #[test]
    fn test_explicit_data_keeps_non_object_values() {
        let descriptor = build(Verb::Create, payload(json!({"data": [1, 2, 3]})));
        assert_eq!(descriptor.body, Some(json!([1, 2, 3])));
    }

    #[test]
    fn test_empty_payload_is_valid() {
        let descriptor = build(Verb::Read, Payload::new());
        assert_eq!(descriptor.query, Some(json!({})));
        assert_eq!(descriptor.body, None);
    }
}
