//! Encounter tracker port - the only way the HUD mutates turn order

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::value_objects::CombatantId;

#[async_trait]
pub trait EncounterTrackerPort: Send + Sync {
    /// Roll initiative for the given combatants as one batch
    async fn roll_initiative(&self, combatants: &[CombatantId]) -> Result<()>;

    /// Advance to the next turn
    async fn next_turn(&self) -> Result<()>;
}
