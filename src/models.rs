use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed acknowledgement returned for every handled request.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CallbackResponse {
    pub status: String,
    pub message: String,
}

/// Checkout-facing result of an STK push: `{"success": .., "data": {..}}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StkPushResponse {
    pub success: bool,
    pub data: StkPushData,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StkPushData {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

impl StkPushResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: StkPushData {
                message: message.into(),
                response: None,
            },
        }
    }

    pub fn failure(message: impl Into<String>, response: Option<Value>) -> Self {
        Self {
            success: false,
            data: StkPushData {
                message: message.into(),
                response,
            },
        }
    }
}
