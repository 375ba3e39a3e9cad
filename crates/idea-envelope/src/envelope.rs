//! Agent reply envelope and the unwrap routine

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw reply from an agent gateway call
///
/// Every field is lenient: gateways relaying through other layers have been
/// observed to omit any of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentReply {
    /// Whether the gateway call succeeded
    #[serde(default)]
    pub success: bool,
    /// Conversation session, when the gateway tracks one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Response body; absent on some failure shapes
    #[serde(default)]
    pub response: Option<ReplyBody>,
}

/// Body of a successful reply
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplyBody {
    /// The (possibly wrapped, possibly string-encoded) domain payload
    #[serde(default)]
    pub result: Value,
}

impl AgentReply {
    /// Successful reply carrying `result`
    #[inline]
    #[must_use]
    pub fn ok(result: Value) -> Self {
        Self {
            success: true,
            session_id: None,
            response: Some(ReplyBody { result }),
        }
    }

    /// Failed reply
    #[inline]
    #[must_use]
    pub fn failed() -> Self {
        Self::default()
    }

    /// With session id
    #[inline]
    #[must_use]
    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

/// Unwrap a reply down to its domain payload object
///
/// `signal_key` marks the payload kind ("ideas" for batches, "email_sent"
/// for receipts): an object that already carries it is the payload and is
/// not unwrapped further, even if it also has a `result` key.
///
/// Up to two rounds of unwrapping are performed; each round strips one
/// `{ "result": … }` layer (when the signal key is absent) and then decodes
/// the value if it is a JSON-encoded string. The final value must be an
/// object.
pub(crate) fn unwrap_payload(reply: &AgentReply, signal_key: &str) -> Option<Value> {
    if !reply.success {
        return None;
    }
    let body = reply.response.as_ref()?;
    let mut value = body.result.clone();

    for round in 0..2 {
        if let Value::Object(map) = &value {
            if map.contains_key("result") && !map.contains_key(signal_key) {
                value = map.get("result").cloned().unwrap_or(Value::Null);
            }
        }
        if let Value::String(raw) = &value {
            match serde_json::from_str(raw) {
                Ok(decoded) => value = decoded,
                Err(err) => {
                    tracing::debug!(round, %err, "payload string is not valid JSON");
                    return None;
                }
            }
        }
    }

    if value.is_object() {
        Some(value)
    } else {
        tracing::debug!(kind = signal_key, "unwrapped payload is not an object");
        None
    }
}
