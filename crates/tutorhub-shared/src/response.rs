//! The reply envelope consumed by the single-page client.

use serde::{Deserialize, Serialize};

/// Every endpoint replies with this shape; `data` is `null` whenever an
/// operation carries no payload (sign-in, deletes, errors).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiReply<T> {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiReply<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status: 200,
            message: None,
            data: Some(data),
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            status: 200,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    /// A payload-less reply; used for sign-in/sign-out confirmations and
    /// error responses.
    pub fn message(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payloadless_reply_serializes_data_as_null() {
        let reply: ApiReply<()> = ApiReply::message(200, "Sign in was successful");
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["status"], 200);
        assert_eq!(json["message"], "Sign in was successful");
        assert!(json["data"].is_null());
    }

    #[test]
    fn message_is_omitted_when_absent() {
        let reply = ApiReply::ok(5);
        let json = serde_json::to_value(&reply).unwrap();
        assert!(json.get("message").is_none());
        assert_eq!(json["data"], 5);
    }
}
