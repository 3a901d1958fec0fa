// envelope-client/src/envelope.rs
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Inner status signalling success.
pub const STATUS_OK: i64 = 200;
/// Inner status signalling an authentication rejection.
pub const STATUS_AUTH_REJECTED: i64 = 403;

/// The JSON body every backend response carries. The inner `status` is an
/// application-level code distinct from the HTTP transport status.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(deserialize_with = "loose_status")]
    pub status: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// The backend emits the inner status both as a JSON number and as a
/// numeric string; `200` and `"200"` must compare equal.
fn loose_status<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    match &raw {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| serde::de::Error::custom(format!("status out of range: {n}"))),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("non-numeric status: {s:?}"))),
        other => Err(serde::de::Error::custom(format!(
            "status must be a number or numeric string, got {other}"
        ))),
    }
}
