//! Request definitions
//!
//! Typed view of the envelope returned by `/finish` when work is pending.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DappError, Result};

/// Request types, as named on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Advance,
    Inspect,
}

impl RequestKind {
    /// Wire name (`request_type` field)
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Advance => "advance_state",
            RequestKind::Inspect => "inspect_state",
        }
    }

    /// Parse a wire name
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "advance_state" => Some(RequestKind::Advance),
            "inspect_state" => Some(RequestKind::Inspect),
            _ => None,
        }
    }
}

/// Metadata attached to an advance request
///
/// Only `msg_sender` is required; the rest is carried for logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceMetadata {
    pub msg_sender: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_index: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,

    #[serde(default, alias = "timestamp", skip_serializing_if = "Option::is_none")]
    pub block_timestamp: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_contract: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

impl AdvanceMetadata {
    /// Metadata carrying only the sender
    pub fn from_sender(sender: impl Into<String>) -> Self {
        Self {
            msg_sender: sender.into(),
            input_index: None,
            block_number: None,
            block_timestamp: None,
            app_contract: None,
            chain_id: None,
        }
    }
}

/// Body of an `advance_state` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceRequestData {
    pub metadata: AdvanceMetadata,

    /// Hex-encoded sentence
    pub payload: String,
}

impl AdvanceRequestData {
    pub fn sender(&self) -> &str {
        &self.metadata.msg_sender
    }
}

/// Body of an `inspect_state` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectRequestData {
    /// Hex-encoded route name
    pub payload: String,
}

/// A request handed out by the rollup server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestEnvelope {
    Advance(AdvanceRequestData),
    Inspect(InspectRequestData),
}

/// Untyped envelope, before `data` is checked against `request_type`
#[derive(Debug, Deserialize)]
struct RawEnvelope {
    request_type: String,
    data: Value,
}

impl RequestEnvelope {
    /// Get the request kind
    pub fn kind(&self) -> RequestKind {
        match self {
            RequestEnvelope::Advance(_) => RequestKind::Advance,
            RequestEnvelope::Inspect(_) => RequestKind::Inspect,
        }
    }

    /// Parse a `/finish` response body
    ///
    /// A body that is not an envelope, or whose `data` does not match its
    /// `request_type`, is a `ResponseFormat` error. A well-formed envelope
    /// with an unrecognized `request_type` is `UnknownRequestKind`.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let raw: RawEnvelope = serde_json::from_slice(body)?;

        match RequestKind::from_wire(&raw.request_type) {
            Some(RequestKind::Advance) => Ok(RequestEnvelope::Advance(
                serde_json::from_value(raw.data).map_err(|e| {
                    DappError::ResponseFormat(format!("advance_state data: {}", e))
                })?,
            )),
            Some(RequestKind::Inspect) => Ok(RequestEnvelope::Inspect(
                serde_json::from_value(raw.data).map_err(|e| {
                    DappError::ResponseFormat(format!("inspect_state data: {}", e))
                })?,
            )),
            None => Err(DappError::UnknownRequestKind(raw.request_type)),
        }
    }

    /// Render as the JSON the rollup server sends
    pub fn to_json(&self) -> Value {
        let data = match self {
            RequestEnvelope::Advance(data) => serde_json::to_value(data),
            RequestEnvelope::Inspect(data) => serde_json::to_value(data),
        }
        .unwrap_or(Value::Null);

        serde_json::json!({
            "request_type": self.kind().as_str(),
            "data": data,
        })
    }
}
