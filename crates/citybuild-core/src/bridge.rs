//! Message codec for the host shell bridge.
//!
//! Messages are JSON objects `{ "type": ..., "data": ... }` exchanged with the
//! native shell hosting the web view. The transport lives in the client.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SHOW_ONBOARDING: &str = "SHOW_ONBOARDING";
pub const HIDE_ONBOARDING: &str = "HIDE_ONBOARDING";
pub const SNAP_CHANGED: &str = "SNAP_CHANGED";
pub const CREATE_ACTION_GOAL: &str = "CREATE_ACTION_GOAL";
pub const GOAL_SETTING_COMPLETED: &str = "GOAL_SETTING_COMPLETED";

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("malformed bridge message: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("bridge payload is not a string")]
    NotText,
}

/// One message exchanged with the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl BridgeMessage {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            data: None,
        }
    }

    pub fn with_data(kind: impl Into<String>, data: Value) -> Self {
        Self {
            kind: kind.into(),
            data: Some(data),
        }
    }

    /// Reports a settled sheet ratio to the host.
    pub fn snap_changed(ratio: f64) -> Self {
        Self::with_data(SNAP_CHANGED, serde_json::json!({ "ratio": ratio }))
    }

    pub fn decode(text: &str) -> Result<Self, BridgeError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn encode(&self) -> Result<String, BridgeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Interprets the message as a command the client understands.
    pub fn command(&self) -> InboundCommand {
        match self.kind.as_str() {
            SHOW_ONBOARDING => {
                let show = self
                    .data
                    .as_ref()
                    .and_then(|data| data.get("show"))
                    .and_then(Value::as_bool)
                    .unwrap_or(true);
                InboundCommand::ShowOnboarding(show)
            }
            HIDE_ONBOARDING => InboundCommand::HideOnboarding,
            other => InboundCommand::Unknown(other.to_string()),
        }
    }
}

/// Inbound commands recognized by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundCommand {
    ShowOnboarding(bool),
    HideOnboarding,
    Unknown(String),
}

impl InboundCommand {
    /// Onboarding visibility requested by this command, if any.
    pub fn onboarding_visibility(&self) -> Option<bool> {
        match self {
            Self::ShowOnboarding(show) => Some(*show),
            Self::HideOnboarding => Some(false),
            Self::Unknown(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_onboarding_with_flag() {
        let msg = BridgeMessage::decode(r#"{"type":"SHOW_ONBOARDING","data":{"show":false}}"#).unwrap();
        assert_eq!(msg.command(), InboundCommand::ShowOnboarding(false));
        assert_eq!(msg.command().onboarding_visibility(), Some(false));
    }

    #[test]
    fn test_show_onboarding_defaults_to_true() {
        let msg = BridgeMessage::decode(r#"{"type":"SHOW_ONBOARDING"}"#).unwrap();
        assert_eq!(msg.command(), InboundCommand::ShowOnboarding(true));

        let msg = BridgeMessage::decode(r#"{"type":"SHOW_ONBOARDING","data":{"show":"yes"}}"#).unwrap();
        assert_eq!(msg.command(), InboundCommand::ShowOnboarding(true));
    }

    #[test]
    fn test_hide_and_unknown() {
        let msg = BridgeMessage::decode(r#"{"type":"HIDE_ONBOARDING"}"#).unwrap();
        assert_eq!(msg.command().onboarding_visibility(), Some(false));

        let msg = BridgeMessage::decode(r#"{"type":"PING","data":1}"#).unwrap();
        assert_eq!(msg.command(), InboundCommand::Unknown("PING".to_string()));
        assert_eq!(msg.command().onboarding_visibility(), None);
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        assert!(matches!(
            BridgeMessage::decode("not json"),
            Err(BridgeError::Malformed(_))
        ));
        assert!(BridgeMessage::decode(r#"{"data":{}}"#).is_err());
    }

    #[test]
    fn test_encode_omits_missing_data() {
        assert_eq!(
            BridgeMessage::new(HIDE_ONBOARDING).encode().unwrap(),
            r#"{"type":"HIDE_ONBOARDING"}"#
        );
        assert_eq!(
            BridgeMessage::snap_changed(0.35).encode().unwrap(),
            r#"{"type":"SNAP_CHANGED","data":{"ratio":0.35}}"#
        );
    }
}
