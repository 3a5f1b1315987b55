use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::RelayError;

// Request payload accepted by the relay endpoint.
// Fields stay loosely typed so validation can answer with precise messages.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRelayRequest {
    #[serde(default)]
    pub model: Option<Value>,
    #[serde(default)]
    pub messages: Option<Value>,
    #[serde(default)]
    pub temperature: Option<Value>,
}

impl ChatRelayRequest {
    // Parse a raw request body; anything but a JSON object is rejected.
    pub fn from_body(body: &[u8]) -> Result<Self, RelayError> {
        match serde_json::from_slice::<Value>(body) {
            Ok(value @ Value::Object(_)) => {
                serde_json::from_value(value).map_err(|_| RelayError::InvalidJsonBody)
            }
            _ => Err(RelayError::InvalidJsonBody),
        }
    }
}

// JSON error envelope returned by the relay.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    // Transport failure detail for upstream errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    // Operator-facing hint for misconfiguration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
