//! Identifier codec for menu leaves
//!
//! A leaf's click payload is `<actionType>|<actionId>`. Builders guarantee that action
//! ids never contain the delimiter: item ids are host-generated alphanumerics and the
//! fixed ids (`all`, `random`, `break-free`, ...) are chosen delimiter-free.

use serde::{Deserialize, Serialize};

use super::ActionType;

/// Separator between the action type and the action id
pub const DELIMITER: char = '|';

/// Errors from decoding a click payload
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Payload has no '|' delimiter: {0}")]
    MissingDelimiter(String),
}

/// Structured payload attached to every action
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPayload {
    pub action_type: String,
    pub action_id: String,
}

impl ActionPayload {
    pub fn new(action_type: ActionType, action_id: impl Into<String>) -> Self {
        Self {
            action_type: action_type.as_str().to_string(),
            action_id: action_id.into(),
        }
    }

    pub fn encode(&self) -> String {
        encode(&self.action_type, &self.action_id)
    }

    pub fn decode(token: &str) -> Result<Self, DecodeError> {
        let (action_type, action_id) = decode(token)?;
        Ok(Self {
            action_type,
            action_id,
        })
    }

    /// The typed action kind, if this payload names a known one
    pub fn kind(&self) -> Option<ActionType> {
        ActionType::parse(&self.action_type)
    }
}

/// Encode an `(actionType, actionId)` pair into a single token
pub fn encode(action_type: &str, action_id: &str) -> String {
    format!("{action_type}{DELIMITER}{action_id}")
}

/// Decode a token produced by [`encode`]
pub fn decode(token: &str) -> Result<(String, String), DecodeError> {
    token
        .split_once(DELIMITER)
        .map(|(action_type, action_id)| (action_type.to_string(), action_id.to_string()))
        .ok_or_else(|| DecodeError::MissingDelimiter(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_for_builder_ids() {
        let pairs = [
            ("armor", "all"),
            ("armor", "monster"),
            ("monsterAttack", "random"),
            ("action", "break-free"),
            ("utility", "endTurn"),
            ("weapon", "Xk29fQpL0aZ71bCd"),
        ];
        for (action_type, action_id) in pairs {
            let token = encode(action_type, action_id);
            assert_eq!(
                decode(&token).unwrap(),
                (action_type.to_string(), action_id.to_string())
            );
        }
    }

    #[test]
    fn test_payload_encodes_with_pipe() {
        let payload = ActionPayload::new(ActionType::Skills, "might");
        assert_eq!(payload.encode(), "skills|might");
        assert_eq!(ActionPayload::decode("skills|might").unwrap(), payload);
        assert_eq!(payload.kind(), Some(ActionType::Skills));
    }

    #[test]
    fn test_decode_without_delimiter_fails() {
        assert_eq!(
            decode("skills"),
            Err(DecodeError::MissingDelimiter("skills".to_string()))
        );
    }

    #[test]
    fn test_unknown_kind_decodes_but_has_no_kind() {
        let payload = ActionPayload::decode("macro|abc").unwrap();
        assert_eq!(payload.kind(), None);
        assert_eq!(payload.action_id, "abc");
    }
}
