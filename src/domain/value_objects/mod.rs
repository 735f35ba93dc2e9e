//! Value objects - Immutable objects defined by their attributes

mod action_payload;
mod action_type;
mod ids;
mod settings;
mod system_config;

pub use action_payload::{decode, encode, ActionPayload, DecodeError, DELIMITER};
pub use action_type::{
    ActionType, KeyModifier, Maneuver, UtilityAction, ARMOR_TOTAL_ID, MONSTER_ARMOR_ID,
    RANDOM_ATTACK_ID,
};
pub use ids::*;
pub use settings::{HudSettings, TooltipDirection};
pub use system_config::{SystemConfig, ZERO_TIER};
