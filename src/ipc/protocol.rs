//! Wire message sent to an instance
//!
//! One newline-terminated JSON object per connection:
//! `{"method":"message","message":"hi","accessory":0}`. The `message` field is
//! dropped when empty, `accessory` is always written.

use serde::{Deserialize, Serialize};

/// Discriminant selecting the message variant and its delivery policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Jump,
    Message,
    Close,
    Accessory,
}

impl Method {
    /// Delivery policy for this method. Fixed, not configurable.
    pub fn policy(self) -> DeliveryPolicy {
        match self {
            Self::Jump | Self::Close => DeliveryPolicy::Broadcast,
            Self::Message | Self::Accessory => DeliveryPolicy::SingleDelivery,
        }
    }
}

/// How many instances a message is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryPolicy {
    /// Exactly one instance, picked at random, first success wins
    SingleDelivery,
    /// Every discovered instance, one attempt each
    Broadcast,
}

/// Command delivered to an instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireMessage", from = "WireMessage")]
pub enum Message {
    /// Make the instance jump
    Jump,
    /// Have the instance say `text`
    Message { text: String },
    /// Terminate the instance
    Close,
    /// Show accessory `kind`; 0 hides it
    Accessory { kind: i64 },
}

impl Message {
    pub fn method(&self) -> Method {
        match self {
            Self::Jump => Method::Jump,
            Self::Message { .. } => Method::Message,
            Self::Close => Method::Close,
            Self::Accessory { .. } => Method::Accessory,
        }
    }

    pub fn policy(&self) -> DeliveryPolicy {
        self.method().policy()
    }

    /// Serialize to the newline-terminated wire form
    pub fn encode(&self) -> serde_json::Result<Vec<u8>> {
        let mut buf = serde_json::to_vec(self)?;
        buf.push(b'\n');
        Ok(buf)
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Jump => write!(f, "jump"),
            Self::Message { text } => write!(f, "message {:?}", text),
            Self::Close => write!(f, "close"),
            Self::Accessory { kind } => write!(f, "accessory {}", kind),
        }
    }
}

/// Flat record the receiver decodes
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireMessage {
    method: Method,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    message: String,
    #[serde(default)]
    accessory: i64,
}

impl From<Message> for WireMessage {
    fn from(msg: Message) -> Self {
        let method = msg.method();
        let (message, accessory) = match msg {
            Message::Message { text } => (text, 0),
            Message::Accessory { kind } => (String::new(), kind),
            Message::Jump | Message::Close => (String::new(), 0),
        };
        Self {
            method,
            message,
            accessory,
        }
    }
}

impl From<WireMessage> for Message {
    fn from(wire: WireMessage) -> Self {
        match wire.method {
            Method::Jump => Self::Jump,
            Method::Message => Self::Message { text: wire.message },
            Method::Close => Self::Close,
            Method::Accessory => Self::Accessory {
                kind: wire.accessory,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn wire(msg: &Message) -> Value {
        serde_json::to_value(msg).unwrap()
    }

    #[test]
    fn test_message_keeps_accessory_field() {
        let msg = Message::Message {
            text: "hi".to_string(),
        };
        assert_eq!(
            wire(&msg),
            json!({"method": "message", "message": "hi", "accessory": 0})
        );
    }

    #[test]
    fn test_jump_omits_message_field() {
        let value = wire(&Message::Jump);
        assert_eq!(value, json!({"method": "jump", "accessory": 0}));
        assert!(value.get("message").is_none());
    }

    #[test]
    fn test_empty_text_is_omitted() {
        let value = wire(&Message::Message {
            text: String::new(),
        });
        assert!(value.get("message").is_none());
        assert_eq!(value["method"], "message");
    }

    #[test]
    fn test_accessory_zero_is_written() {
        assert_eq!(
            wire(&Message::Accessory { kind: 0 }),
            json!({"method": "accessory", "accessory": 0})
        );
        assert_eq!(wire(&Message::Accessory { kind: 3 })["accessory"], 3);
    }

    #[test]
    fn test_encode_is_newline_terminated() {
        let bytes = Message::Close.encode().unwrap();
        assert_eq!(bytes.last(), Some(&b'\n'));
        let decoded: Message = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, Message::Close);
    }

    #[test]
    fn test_decode_without_optional_fields() {
        let msg: Message = serde_json::from_str(r#"{"method":"accessory"}"#).unwrap();
        assert_eq!(msg, Message::Accessory { kind: 0 });
    }

    #[test]
    fn test_policy_mapping() {
        assert_eq!(Method::Jump.policy(), DeliveryPolicy::Broadcast);
        assert_eq!(Method::Close.policy(), DeliveryPolicy::Broadcast);
        assert_eq!(Method::Message.policy(), DeliveryPolicy::SingleDelivery);
        assert_eq!(Method::Accessory.policy(), DeliveryPolicy::SingleDelivery);
    }
}
