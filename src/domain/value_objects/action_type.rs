//! Action kinds carried by menu leaves
//!
//! Every clickable entry in the HUD names one of these kinds. The string form is the
//! wire form used by the identifier codec, so it must stay stable.

use serde::{Deserialize, Serialize};

/// Aggregate armor action id for standard characters
pub const ARMOR_TOTAL_ID: &str = "all";
/// Aggregate armor action id for adversaries
pub const MONSTER_ARMOR_ID: &str = "monster";
/// Synthetic "roll a random attack" action id for adversaries
pub const RANDOM_ATTACK_ID: &str = "random";

/// Kind of a menu action, as encoded in the click payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionType {
    Attributes,
    Skills,
    Armor,
    Weapon,
    MonsterAttack,
    /// Generic combat maneuver (dodge, parry, ...)
    Action,
    Spell,
    Condition,
    Consumable,
    Utility,
    /// Inventory item posted to the shared log instead of rolled
    Item,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attributes => "attributes",
            Self::Skills => "skills",
            Self::Armor => "armor",
            Self::Weapon => "weapon",
            Self::MonsterAttack => "monsterAttack",
            Self::Action => "action",
            Self::Spell => "spell",
            Self::Condition => "condition",
            Self::Consumable => "consumable",
            Self::Utility => "utility",
            Self::Item => "item",
        }
    }

    /// Parse the wire form. Unknown kinds are `None` so stale identifiers fall through.
    pub fn parse(value: &str) -> Option<Self> {
        let kind = match value {
            "attributes" => Self::Attributes,
            "skills" => Self::Skills,
            "armor" => Self::Armor,
            "weapon" => Self::Weapon,
            "monsterAttack" => Self::MonsterAttack,
            "action" => Self::Action,
            "spell" => Self::Spell,
            "condition" => Self::Condition,
            "consumable" => Self::Consumable,
            "utility" => Self::Utility,
            "item" => Self::Item,
            _ => return None,
        };
        Some(kind)
    }

    /// Kinds the host can render directly (post to chat) instead of rolling
    pub fn is_renderable(&self) -> bool {
        matches!(self, Self::Item)
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modifier key held while clicking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyModifier {
    #[default]
    None,
    Shift,
    Alt,
}

/// Generic combat maneuvers offered to every combatant regardless of inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maneuver {
    BreakFree,
    Disarm,
    Dodge,
    Grapple,
    GrappleAttack,
    Parry,
    Retreat,
    Shove,
    UnarmedStrike,
}

impl Maneuver {
    /// Presentation order of the "actions" group
    pub const ALL: [Maneuver; 9] = [
        Self::BreakFree,
        Self::Disarm,
        Self::Dodge,
        Self::Grapple,
        Self::GrappleAttack,
        Self::Parry,
        Self::Retreat,
        Self::Shove,
        Self::UnarmedStrike,
    ];

    /// Action id understood by the character sheet's `rollAction`
    pub fn id(&self) -> &'static str {
        match self {
            Self::BreakFree => "break-free",
            Self::Disarm => "disarm",
            Self::Dodge => "dodge",
            Self::Grapple => "grapple",
            Self::GrappleAttack => "grapple-attack",
            Self::Parry => "parry",
            Self::Retreat => "retreat",
            Self::Shove => "shove",
            Self::UnarmedStrike => "unarmed",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Self::BreakFree => "ACTION.BREAK_FREE",
            Self::Disarm => "ACTION.DISARM",
            Self::Dodge => "ACTION.DODGE",
            Self::Grapple => "ACTION.GRAPPLE",
            Self::GrappleAttack => "ACTION.GRAPPLE_ATTACK",
            Self::Parry => "ACTION.PARRY",
            Self::Retreat => "ACTION.RETREAT",
            Self::Shove => "ACTION.SHOVE",
            Self::UnarmedStrike => "ACTION.UNARMED_STRIKE",
        }
    }
}

/// Commands grouped under the utility tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtilityAction {
    Initiative,
    EndTurn,
    Rest,
    Pride,
    Reputation,
}

impl UtilityAction {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Initiative => "initiative",
            Self::EndTurn => "endTurn",
            Self::Rest => "rests",
            Self::Pride => "pride",
            Self::Reputation => "reputation",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Initiative => "COMBAT.InitiativeRoll",
            Self::EndTurn => "tokenActionHud.endTurn",
            Self::Rest => "SHEET.HEADER.REST",
            Self::Pride => "BIO.PRIDE",
            Self::Reputation => "BIO.REPUTATION",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let action = match value {
            "initiative" => Self::Initiative,
            "endTurn" => Self::EndTurn,
            "rests" => Self::Rest,
            "pride" => Self::Pride,
            "reputation" => Self::Reputation,
            _ => return None,
        };
        Some(action)
    }
}
