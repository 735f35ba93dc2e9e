//! Host command log - records game operations for the host to perform
//!
//! The HTTP adapter cannot call into the character sheet directly, so every outbound
//! port call is captured as a [`HostCommand`] and handed back to the overlay, which
//! replays them in order.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::application::dto::TargetedActor;
use crate::application::ports::outbound::{CharacterSheetPort, EncounterTrackerPort, ItemRendererPort};
use crate::domain::value_objects::{ActorId, CombatantId, TokenId};

/// One operation the host must perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum HostCommand {
    RollAttribute { actor_id: ActorId, token_id: TokenId, attribute: String },
    RollSkill { actor_id: ActorId, token_id: TokenId, skill: String },
    RollGear { actor_id: ActorId, token_id: TokenId, item_id: String },
    RollAction {
        actor_id: ActorId,
        token_id: TokenId,
        action: String,
        item_id: Option<String>,
    },
    RollSpell { actor_id: ActorId, token_id: TokenId, item_id: String },
    RollConsumable { actor_id: ActorId, token_id: TokenId, consumable: String },
    RollArmor { actor_id: ActorId, token_id: TokenId },
    RollSpecificArmor { actor_id: ActorId, token_id: TokenId, item_id: String },
    RollAttack { actor_id: ActorId, token_id: TokenId },
    RollSpecificAttack { actor_id: ActorId, token_id: TokenId, item_id: String },
    ToggleCondition { actor_id: ActorId, token_id: TokenId, condition: String },
    Rest { actor_id: ActorId, token_id: TokenId },
    RollPride { actor_id: ActorId, token_id: TokenId },
    RollReputation { actor_id: ActorId, token_id: TokenId },
    RenderItem { actor_id: ActorId, token_id: TokenId, item_id: String },
    RollInitiative { combatant_ids: Vec<CombatantId> },
    NextTurn,
}

/// Shared, append-only command log implementing every outbound game port
#[derive(Debug, Clone, Default)]
pub struct HostCommandLog {
    commands: Arc<Mutex<Vec<HostCommand>>>,
}

impl HostCommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    async fn push(&self, command: HostCommand) -> Result<()> {
        tracing::debug!(?command, "Recorded host command");
        self.commands.lock().await.push(command);
        Ok(())
    }

    /// Drain everything recorded so far
    pub async fn take(&self) -> Vec<HostCommand> {
        std::mem::take(&mut *self.commands.lock().await)
    }
}

fn ids(actor: &TargetedActor) -> (ActorId, TokenId) {
    (actor.actor_id().clone(), actor.token_id.clone())
}

#[async_trait]
impl CharacterSheetPort for HostCommandLog {
    async fn roll_attribute(&self, actor: &TargetedActor, attribute: &str) -> Result<()> {
        let (actor_id, token_id) = ids(actor);
        self.push(HostCommand::RollAttribute {
            actor_id,
            token_id,
            attribute: attribute.to_string(),
        })
        .await
    }

    async fn roll_skill(&self, actor: &TargetedActor, skill: &str) -> Result<()> {
        let (actor_id, token_id) = ids(actor);
        self.push(HostCommand::RollSkill {
            actor_id,
            token_id,
            skill: skill.to_string(),
        })
        .await
    }

    async fn roll_gear(&self, actor: &TargetedActor, item_id: &str) -> Result<()> {
        let (actor_id, token_id) = ids(actor);
        self.push(HostCommand::RollGear {
            actor_id,
            token_id,
            item_id: item_id.to_string(),
        })
        .await
    }

    async fn roll_action(&self, actor: &TargetedActor, maneuver: &str, item_id: Option<&str>) -> Result<()> {
        let (actor_id, token_id) = ids(actor);
        self.push(HostCommand::RollAction {
            actor_id,
            token_id,
            action: maneuver.to_string(),
            item_id: item_id.map(String::from),
        })
        .await
    }

    async fn roll_spell(&self, actor: &TargetedActor, item_id: &str) -> Result<()> {
        let (actor_id, token_id) = ids(actor);
        self.push(HostCommand::RollSpell {
            actor_id,
            token_id,
            item_id: item_id.to_string(),
        })
        .await
    }

    async fn roll_consumable(&self, actor: &TargetedActor, consumable: &str) -> Result<()> {
        let (actor_id, token_id) = ids(actor);
        self.push(HostCommand::RollConsumable {
            actor_id,
            token_id,
            consumable: consumable.to_string(),
        })
        .await
    }

    async fn roll_armor(&self, actor: &TargetedActor) -> Result<()> {
        let (actor_id, token_id) = ids(actor);
        self.push(HostCommand::RollArmor { actor_id, token_id }).await
    }

    async fn roll_specific_armor(&self, actor: &TargetedActor, item_id: &str) -> Result<()> {
        let (actor_id, token_id) = ids(actor);
        self.push(HostCommand::RollSpecificArmor {
            actor_id,
            token_id,
            item_id: item_id.to_string(),
        })
        .await
    }

    async fn roll_attack(&self, actor: &TargetedActor) -> Result<()> {
        let (actor_id, token_id) = ids(actor);
        self.push(HostCommand::RollAttack { actor_id, token_id }).await
    }

    async fn roll_specific_attack(&self, actor: &TargetedActor, item_id: &str) -> Result<()> {
        let (actor_id, token_id) = ids(actor);
        self.push(HostCommand::RollSpecificAttack {
            actor_id,
            token_id,
            item_id: item_id.to_string(),
        })
        .await
    }

    async fn toggle_condition(&self, actor: &TargetedActor, condition: &str) -> Result<()> {
        let (actor_id, token_id) = ids(actor);
        self.push(HostCommand::ToggleCondition {
            actor_id,
            token_id,
            condition: condition.to_string(),
        })
        .await
    }

    async fn rest(&self, actor: &TargetedActor) -> Result<()> {
        let (actor_id, token_id) = ids(actor);
        self.push(HostCommand::Rest { actor_id, token_id }).await
    }

    async fn roll_pride(&self, actor: &TargetedActor) -> Result<()> {
        let (actor_id, token_id) = ids(actor);
        self.push(HostCommand::RollPride { actor_id, token_id }).await
    }

    async fn roll_reputation(&self, actor: &TargetedActor) -> Result<()> {
        let (actor_id, token_id) = ids(actor);
        self.push(HostCommand::RollReputation { actor_id, token_id }).await
    }
}

#[async_trait]
impl EncounterTrackerPort for HostCommandLog {
    async fn roll_initiative(&self, combatants: &[CombatantId]) -> Result<()> {
        self.push(HostCommand::RollInitiative {
            combatant_ids: combatants.to_vec(),
        })
        .await
    }

    async fn next_turn(&self) -> Result<()> {
        self.push(HostCommand::NextTurn).await
    }
}

#[async_trait]
impl ItemRendererPort for HostCommandLog {
    async fn render_item(&self, actor: &TargetedActor, item_id: &str) -> Result<()> {
        let (actor_id, token_id) = ids(actor);
        self.push(HostCommand::RenderItem {
            actor_id,
            token_id,
            item_id: item_id.to_string(),
        })
        .await
    }
}
