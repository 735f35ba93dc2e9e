//! Character sheet port - roll and toggle operations of the actor's sheet
//!
//! Implementations perform the actual game mutation (dice rolls, chat cards,
//! condition toggles). Failures propagate to the caller untouched.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::dto::TargetedActor;

#[async_trait]
pub trait CharacterSheetPort: Send + Sync {
    /// `rollAttribute`
    async fn roll_attribute(&self, actor: &TargetedActor, attribute: &str) -> Result<()>;

    /// `rollSkill`
    async fn roll_skill(&self, actor: &TargetedActor, skill: &str) -> Result<()>;

    /// `rollGear` - attack with a weapon
    async fn roll_gear(&self, actor: &TargetedActor, item_id: &str) -> Result<()>;

    /// `rollAction` - a combat maneuver, optionally performed with a weapon
    async fn roll_action(&self, actor: &TargetedActor, maneuver: &str, item_id: Option<&str>) -> Result<()>;

    /// `rollSpell`
    async fn roll_spell(&self, actor: &TargetedActor, item_id: &str) -> Result<()>;

    /// `rollConsumable`
    async fn roll_consumable(&self, actor: &TargetedActor, consumable: &str) -> Result<()>;

    /// `rollArmor` - all armor pieces, or a monster's natural armor
    async fn roll_armor(&self, actor: &TargetedActor) -> Result<()>;

    /// `rollSpecificArmor`
    async fn roll_specific_armor(&self, actor: &TargetedActor, item_id: &str) -> Result<()>;

    /// `rollAttack` - a random monster attack
    async fn roll_attack(&self, actor: &TargetedActor) -> Result<()>;

    /// `rollSpecificAttack`
    async fn roll_specific_attack(&self, actor: &TargetedActor, item_id: &str) -> Result<()>;

    /// `toggleCondition`
    async fn toggle_condition(&self, actor: &TargetedActor, condition: &str) -> Result<()>;

    /// `rest`
    async fn rest(&self, actor: &TargetedActor) -> Result<()>;

    /// `rollPride`
    async fn roll_pride(&self, actor: &TargetedActor) -> Result<()>;

    /// `rollReputation`
    async fn roll_reputation(&self, actor: &TargetedActor) -> Result<()>;
}
