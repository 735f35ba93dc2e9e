//! Encounter snapshot - the turn tracker as seen at the moment of an event

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ActorId, CombatantId, TokenId};

/// One entry in the turn order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combatant {
    pub id: CombatantId,
    #[serde(default)]
    pub actor_id: Option<ActorId>,
    #[serde(default)]
    pub token_id: Option<TokenId>,
    /// `None` until initiative has been rolled
    #[serde(default)]
    pub initiative: Option<f64>,
}

impl Combatant {
    pub fn new(id: impl Into<CombatantId>) -> Self {
        Self {
            id: id.into(),
            actor_id: None,
            token_id: None,
            initiative: None,
        }
    }

    pub fn with_actor(mut self, actor_id: impl Into<ActorId>) -> Self {
        self.actor_id = Some(actor_id.into());
        self
    }

    pub fn with_token(mut self, token_id: impl Into<TokenId>) -> Self {
        self.token_id = Some(token_id.into());
        self
    }

    pub fn with_initiative(mut self, initiative: f64) -> Self {
        self.initiative = Some(initiative);
        self
    }

    pub fn has_rolled(&self) -> bool {
        self.initiative.is_some()
    }
}

/// The active encounter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Encounter {
    pub combatants: Vec<Combatant>,
    /// Index of the acting combatant
    #[serde(default)]
    pub turn: Option<usize>,
}

impl Encounter {
    pub fn new(combatants: Vec<Combatant>) -> Self {
        Self {
            combatants,
            turn: None,
        }
    }

    pub fn with_turn(mut self, turn: usize) -> Self {
        self.turn = Some(turn);
        self
    }

    pub fn current(&self) -> Option<&Combatant> {
        self.turn.and_then(|turn| self.combatants.get(turn))
    }

    /// Whether `token` belongs to the combatant whose turn it is
    pub fn is_current_token(&self, token: &TokenId) -> bool {
        self.current()
            .and_then(|combatant| combatant.token_id.as_ref())
            .is_some_and(|current| current == token)
    }

    /// All combatants placed by any of `tokens`
    pub fn combatants_for_tokens<'a>(&'a self, tokens: &'a [TokenId]) -> impl Iterator<Item = &'a Combatant> + 'a {
        self.combatants.iter().filter(move |combatant| {
            combatant
                .token_id
                .as_ref()
                .is_some_and(|token| tokens.contains(token))
        })
    }

    /// First combatant without initiative belonging to this token, falling back to the actor
    pub fn pending_for(&self, token: Option<&TokenId>, actor: &ActorId) -> Option<&Combatant> {
        let pending = || self.combatants.iter().filter(|combatant| !combatant.has_rolled());
        token
            .and_then(|token| pending().find(|combatant| combatant.token_id.as_ref() == Some(token)))
            .or_else(|| pending().find(|combatant| combatant.actor_id.as_ref() == Some(actor)))
    }
}
