//! Selection and click context passed in by the host on every event

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Character, Encounter};
use crate::domain::value_objects::{ActorId, KeyModifier, TokenId};

/// A token the user currently controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlledToken {
    pub token_id: TokenId,
    /// Actor document behind the token; tokens without an actor carry none
    #[serde(default)]
    pub actor: Option<Character>,
}

impl ControlledToken {
    pub fn new(token_id: impl Into<TokenId>, actor: Option<Character>) -> Self {
        Self {
            token_id: token_id.into(),
            actor,
        }
    }
}

/// Everything the HUD needs to know about the current selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionContext {
    #[serde(default)]
    pub tokens: Vec<ControlledToken>,
    /// Active encounter, if one is running
    #[serde(default)]
    pub encounter: Option<Encounter>,
}

impl SelectionContext {
    pub fn new(tokens: Vec<ControlledToken>) -> Self {
        Self {
            tokens,
            encounter: None,
        }
    }

    pub fn with_encounter(mut self, encounter: Encounter) -> Self {
        self.encounter = Some(encounter);
        self
    }

    /// The token when exactly one is controlled
    pub fn single_token(&self) -> Option<&TokenId> {
        match self.tokens.as_slice() {
            [token] => Some(&token.token_id),
            _ => None,
        }
    }

    /// The token and its actor when exactly one token with an actor is controlled
    pub fn single_character(&self) -> Option<(&TokenId, &Character)> {
        match self.tokens.as_slice() {
            [token] => token.actor.as_ref().map(|actor| (&token.token_id, actor)),
            _ => None,
        }
    }

    pub fn token_ids(&self) -> Vec<TokenId> {
        self.tokens.iter().map(|token| token.token_id.clone()).collect()
    }

    /// Actors a click applies to.
    ///
    /// A single selected token is targeted whatever its actor kind; in a
    /// multi-selection only tokens backed by a character or monster are.
    pub fn targets(&self) -> Vec<TargetedActor> {
        if let Some((token_id, actor)) = self.single_character() {
            return vec![TargetedActor::new(token_id.clone(), actor.clone())];
        }
        self.tokens
            .iter()
            .filter_map(|token| {
                token
                    .actor
                    .as_ref()
                    .filter(|actor| actor.kind.is_known())
                    .map(|actor| TargetedActor::new(token.token_id.clone(), actor.clone()))
            })
            .collect()
    }
}

/// One actor/token pair an operation is invoked against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetedActor {
    pub token_id: TokenId,
    pub character: Character,
}

impl TargetedActor {
    pub fn new(token_id: impl Into<TokenId>, character: Character) -> Self {
        Self {
            token_id: token_id.into(),
            character,
        }
    }

    pub fn actor_id(&self) -> &ActorId {
        &self.character.id
    }
}

/// Input event details for a click
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    #[serde(default)]
    pub modifier: KeyModifier,
}

impl ClickEvent {
    pub fn with_modifier(modifier: KeyModifier) -> Self {
        Self { modifier }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CharacterKind;

    fn token(id: &str, kind: Option<CharacterKind>) -> ControlledToken {
        ControlledToken::new(id, kind.map(|kind| Character::new(format!("actor-{id}"), id, kind)))
    }

    #[test]
    fn test_single_character_requires_one_token() {
        let single = SelectionContext::new(vec![token("t1", Some(CharacterKind::Standard))]);
        assert_eq!(single.single_character().map(|(t, _)| t.as_str()), Some("t1"));

        let pair = SelectionContext::new(vec![
            token("t1", Some(CharacterKind::Standard)),
            token("t2", Some(CharacterKind::Standard)),
        ]);
        assert!(pair.single_character().is_none());
        assert!(pair.single_token().is_none());

        let bare = SelectionContext::new(vec![token("t1", None)]);
        assert!(bare.single_character().is_none());
        assert!(bare.single_token().is_some());
    }

    #[test]
    fn test_multi_selection_targets_only_known_kinds() {
        let selection = SelectionContext::new(vec![
            token("t1", Some(CharacterKind::Standard)),
            token("t2", Some(CharacterKind::Other)),
            token("t3", None),
            token("t4", Some(CharacterKind::Adversary)),
        ]);
        let targets: Vec<_> = selection
            .targets()
            .into_iter()
            .map(|target| target.token_id.to_string())
            .collect();
        assert_eq!(targets, vec!["t1", "t4"]);
    }

    #[test]
    fn test_single_selection_targets_any_kind() {
        let selection = SelectionContext::new(vec![token("t1", Some(CharacterKind::Other))]);
        assert_eq!(selection.targets().len(), 1);
    }
}
