use crate::request::{NotificationRequest, Presentation};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const MESSAGE_TYPE: &str = "ntp_message";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// JSON document posted to the push service. Field order is the serialized
/// key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedPayload {
    pub registration_ids: [String; 1],
    pub data: PayloadData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadData {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub timestamp: String,
    pub priority: i64,
    /// base64
    pub title: String,
    /// base64
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speak: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentation: Option<Presentation>,
}

impl EncodedPayload {
    pub fn new(request: &NotificationRequest) -> Self {
        Self::encode(request, Utc::now())
    }

    pub fn encode(request: &NotificationRequest, now: DateTime<Utc>) -> Self {
        Self {
            registration_ids: [request.sender_id.clone()],
            data: PayloadData {
                kind: MESSAGE_TYPE,
                timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
                priority: request.priority,
                title: STANDARD.encode(&request.title),
                message: request.message.as_ref().map(|m| STANDARD.encode(m)),
                source: request.source.clone(),
                speak: request.speak,
                notify: request.notify,
                presentation: request.presentation,
            },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
