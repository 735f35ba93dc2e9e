//! Dispatch Service - Routes a clicked action to the game operations it stands for
//!
//! A click carries an encoded `actionType|actionId` payload. The service decodes it,
//! decides how many actors the click applies to and invokes the matching character
//! sheet, encounter tracker or item renderer operation for each of them.
//!
//! Ids are checked against the actor's data before anything is invoked. A click on an
//! id the actor no longer has (an item sold, a skill removed) does nothing.

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::application::dto::{ClickEvent, SelectionContext, TargetedActor};
use crate::application::ports::inbound::ActionDispatcher;
use crate::application::ports::outbound::{CharacterSheetPort, EncounterTrackerPort, ItemRendererPort};
use crate::domain::entities::{Encounter, GroupData, ItemKind};
use crate::domain::value_objects::{
    ActionPayload, ActionType, CombatantId, HudSettings, KeyModifier, Maneuver, UtilityAction,
    ARMOR_TOTAL_ID, MONSTER_ARMOR_ID, RANDOM_ATTACK_ID,
};

/// Click dispatcher over the game's outbound ports
pub struct DispatchService {
    sheet: Arc<dyn CharacterSheetPort>,
    tracker: Arc<dyn EncounterTrackerPort>,
    renderer: Arc<dyn ItemRendererPort>,
    settings: HudSettings,
}

impl DispatchService {
    pub fn new(
        sheet: Arc<dyn CharacterSheetPort>,
        tracker: Arc<dyn EncounterTrackerPort>,
        renderer: Arc<dyn ItemRendererPort>,
        settings: HudSettings,
    ) -> Self {
        Self {
            sheet,
            tracker,
            renderer,
            settings,
        }
    }

    /// Dispatch a decoded payload against every targeted actor.
    ///
    /// Actors are handled strictly in order; the first failing operation aborts the
    /// remaining ones and its error is returned.
    #[instrument(
        skip(self, targets, encounter),
        fields(action_type = %payload.action_type, action_id = %payload.action_id, targets = targets.len())
    )]
    pub async fn handle_action(
        &self,
        payload: &ActionPayload,
        modifier: KeyModifier,
        targets: &[TargetedActor],
        encounter: Option<&Encounter>,
    ) -> Result<()> {
        let Some(kind) = payload.kind() else {
            debug!("Ignoring click with unknown action type");
            return Ok(());
        };
        let id = payload.action_id.as_str();

        if kind.is_renderable() && self.settings.render_item_on_click {
            return self.render_item(targets, id).await;
        }

        match targets {
            [] => {
                debug!("Click has no target actors");
                Ok(())
            }
            [actor] => self.handle_for_actor(kind, id, modifier, actor, encounter).await,
            _ if kind == ActionType::Utility && UtilityAction::parse(id) == Some(UtilityAction::Initiative) => {
                self.roll_group_initiative(targets, encounter).await
            }
            _ => {
                for actor in targets {
                    self.handle_for_actor(kind, id, modifier, actor, encounter).await?;
                }
                Ok(())
            }
        }
    }

    async fn render_item(&self, targets: &[TargetedActor], item_id: &str) -> Result<()> {
        match targets.first() {
            Some(actor) if actor.character.item(item_id).is_some() => {
                self.renderer.render_item(actor, item_id).await
            }
            _ => {
                debug!(item_id, "No item to render");
                Ok(())
            }
        }
    }

    /// One batched roll for every selected token that still has to roll
    async fn roll_group_initiative(&self, targets: &[TargetedActor], encounter: Option<&Encounter>) -> Result<()> {
        let Some(encounter) = encounter else {
            debug!("Group initiative without an active encounter");
            return Ok(());
        };

        let mut seen = HashSet::new();
        let combatants: Vec<CombatantId> = targets
            .iter()
            .filter_map(|actor| encounter.pending_for(Some(&actor.token_id), actor.actor_id()))
            .filter(|combatant| seen.insert(combatant.id.clone()))
            .map(|combatant| combatant.id.clone())
            .collect();

        if combatants.is_empty() {
            debug!("Every selected combatant has already rolled initiative");
            return Ok(());
        }
        self.tracker.roll_initiative(&combatants).await
    }

    async fn handle_for_actor(
        &self,
        kind: ActionType,
        id: &str,
        modifier: KeyModifier,
        actor: &TargetedActor,
        encounter: Option<&Encounter>,
    ) -> Result<()> {
        let character = &actor.character;
        match kind {
            ActionType::Attributes if character.attributes.contains_key(id) => {
                self.sheet.roll_attribute(actor, id).await
            }
            ActionType::Skills if character.skills.contains_key(id) => self.sheet.roll_skill(actor, id).await,
            ActionType::Armor if id == ARMOR_TOTAL_ID || id == MONSTER_ARMOR_ID => self.sheet.roll_armor(actor).await,
            ActionType::Armor if character.item_of(id, |item_kind| matches!(item_kind, ItemKind::Armor(_))).is_some() => {
                self.sheet.roll_specific_armor(actor, id).await
            }
            ActionType::Weapon if character.item_of(id, |item_kind| matches!(item_kind, ItemKind::Weapon(_))).is_some() => {
                match modifier {
                    KeyModifier::Shift => self.sheet.roll_action(actor, Maneuver::Parry.id(), Some(id)).await,
                    KeyModifier::Alt => self.sheet.roll_action(actor, Maneuver::Disarm.id(), Some(id)).await,
                    KeyModifier::None => self.sheet.roll_gear(actor, id).await,
                }
            }
            ActionType::MonsterAttack if id == RANDOM_ATTACK_ID => self.sheet.roll_attack(actor).await,
            ActionType::MonsterAttack
                if character
                    .item_of(id, |item_kind| matches!(item_kind, ItemKind::MonsterAttack(_)))
                    .is_some() =>
            {
                self.sheet.roll_specific_attack(actor, id).await
            }
            ActionType::Action if Maneuver::ALL.iter().any(|maneuver| maneuver.id() == id) => {
                self.sheet.roll_action(actor, id, None).await
            }
            ActionType::Spell if character.item_of(id, |item_kind| matches!(item_kind, ItemKind::Spell(_))).is_some() => {
                self.sheet.roll_spell(actor, id).await
            }
            ActionType::Condition if character.conditions.contains_key(id) => {
                self.sheet.toggle_condition(actor, id).await
            }
            ActionType::Consumable if character.consumables.contains_key(id) => {
                self.sheet.roll_consumable(actor, id).await
            }
            ActionType::Utility => match UtilityAction::parse(id) {
                Some(utility) => self.handle_utility(utility, actor, encounter).await,
                None => {
                    debug!(id, "Unknown utility action");
                    Ok(())
                }
            },
            _ => {
                debug!(%kind, id, actor = %actor.actor_id(), "Action does not resolve on this actor");
                Ok(())
            }
        }
    }

    async fn handle_utility(
        &self,
        utility: UtilityAction,
        actor: &TargetedActor,
        encounter: Option<&Encounter>,
    ) -> Result<()> {
        match utility {
            UtilityAction::Rest => self.sheet.rest(actor).await,
            UtilityAction::Pride => self.sheet.roll_pride(actor).await,
            UtilityAction::Reputation => self.sheet.roll_reputation(actor).await,
            UtilityAction::Initiative => {
                let pending = encounter.and_then(|encounter| encounter.pending_for(Some(&actor.token_id), actor.actor_id()));
                match pending {
                    Some(combatant) => self.tracker.roll_initiative(std::slice::from_ref(&combatant.id)).await,
                    None => {
                        debug!(actor = %actor.actor_id(), "No combatant waiting on initiative");
                        Ok(())
                    }
                }
            }
            UtilityAction::EndTurn => {
                if encounter.is_some_and(|encounter| encounter.is_current_token(&actor.token_id)) {
                    self.tracker.next_turn().await
                } else {
                    debug!(token = %actor.token_id, "Not this token's turn");
                    Ok(())
                }
            }
        }
    }
}

#[async_trait]
impl ActionDispatcher for DispatchService {
    async fn handle_click(&self, encoded_value: &str, event: &ClickEvent, selection: &SelectionContext) -> Result<()> {
        let payload = match ActionPayload::decode(encoded_value) {
            Ok(payload) => payload,
            Err(e) => {
                debug!(error = %e, "Ignoring click");
                return Ok(());
            }
        };
        let targets = selection.targets();
        self.handle_action(&payload, event.modifier, &targets, selection.encounter.as_ref())
            .await
    }

    async fn handle_hover(&self, _encoded_value: &str, _event: &ClickEvent) -> Result<()> {
        Ok(())
    }

    async fn handle_group_click(&self, _group: &GroupData, _event: &ClickEvent) -> Result<()> {
        Ok(())
    }
}
