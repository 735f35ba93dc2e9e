//! Character entity - the actor data the HUD reads its menus from

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Item, ItemKind};
use crate::domain::value_objects::ActorId;

/// Kind of actor behind a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterKind {
    /// Player character
    #[serde(rename = "character")]
    Standard,
    /// Monster
    #[serde(rename = "monster")]
    Adversary,
    /// Any other actor type the host knows about (vehicles, strongholds, ...)
    #[serde(other)]
    Other,
}

impl CharacterKind {
    /// Kinds the HUD can build menus for and dispatch to
    pub fn is_known(&self) -> bool {
        matches!(self, Self::Standard | Self::Adversary)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribute {
    pub label: String,
    pub value: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub label: String,
    pub value: i32,
    /// Key of the attribute this skill rolls with; empty when the host omits it
    pub attribute: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Condition {
    pub label: String,
    /// Whether the condition is currently applied
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumable {
    #[serde(default)]
    pub label: String,
    /// Index into the system's die-tier table
    #[serde(default)]
    pub value: Option<i32>,
}

/// Natural armor of an adversary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmorDefense {
    pub value: i32,
    pub max: i32,
    pub description: Option<String>,
}

/// A character as read from the host's actor document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: ActorId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CharacterKind,
    #[serde(default)]
    pub attributes: BTreeMap<String, Attribute>,
    #[serde(default)]
    pub skills: BTreeMap<String, Skill>,
    #[serde(default)]
    pub conditions: BTreeMap<String, Condition>,
    #[serde(default)]
    pub consumables: BTreeMap<String, Consumable>,
    #[serde(default)]
    pub armor: ArmorDefense,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Character {
    pub fn new(id: impl Into<ActorId>, name: impl Into<String>, kind: CharacterKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            attributes: BTreeMap::new(),
            skills: BTreeMap::new(),
            conditions: BTreeMap::new(),
            consumables: BTreeMap::new(),
            armor: ArmorDefense::default(),
            items: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, label: impl Into<String>, value: i32) -> Self {
        self.attributes.insert(
            key.into(),
            Attribute {
                label: label.into(),
                value,
            },
        );
        self
    }

    pub fn with_skill(
        mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        value: i32,
        attribute: impl Into<String>,
    ) -> Self {
        self.skills.insert(
            key.into(),
            Skill {
                label: label.into(),
                value,
                attribute: attribute.into(),
            },
        );
        self
    }

    pub fn with_condition(mut self, key: impl Into<String>, label: impl Into<String>, active: bool) -> Self {
        self.conditions.insert(
            key.into(),
            Condition {
                label: label.into(),
                value: active,
            },
        );
        self
    }

    pub fn with_consumable(mut self, key: impl Into<String>, label: impl Into<String>, value: Option<i32>) -> Self {
        self.consumables.insert(
            key.into(),
            Consumable {
                label: label.into(),
                value,
            },
        );
        self
    }

    pub fn with_armor(mut self, value: i32, description: Option<&str>) -> Self {
        self.armor = ArmorDefense {
            value,
            max: value,
            description: description.map(String::from),
        };
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Owned item by id
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    /// Owned item by id, only if `matches` accepts its kind
    pub fn item_of(&self, id: &str, matches: impl Fn(&ItemKind) -> bool) -> Option<&Item> {
        self.item(id).filter(|item| matches(&item.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_actor_type_deserializes_as_other() {
        let character: Character =
            serde_json::from_str(r#"{"id":"a1","name":"Keep","type":"stronghold"}"#).unwrap();
        assert_eq!(character.kind, CharacterKind::Other);
        assert!(!character.kind.is_known());
        assert!(character.items.is_empty());
    }

    #[test]
    fn test_character_from_host_json() {
        let json = r#"{
            "id": "a1",
            "name": "Ylva",
            "type": "character",
            "attributes": { "strength": { "label": "ATTRIBUTE.STRENGTH", "value": 3 } },
            "skills": { "might": { "label": "SKILL.MIGHT", "value": 2, "attribute": "strength" } },
            "conditions": { "cold": { "label": "CONDITION.COLD", "value": true } },
            "consumables": { "food": { "label": "CONSUMABLE.FOOD", "value": 1 } }
        }"#;
        let character: Character = serde_json::from_str(json).unwrap();

        assert_eq!(character.kind, CharacterKind::Standard);
        assert_eq!(character.attributes["strength"].value, 3);
        assert_eq!(character.skills["might"].attribute, "strength");
        assert!(character.conditions["cold"].value);
        assert_eq!(character.consumables["food"].value, Some(1));
        assert_eq!(character.armor, ArmorDefense::default());
    }

    #[test]
    fn test_partial_records_fill_in_defaults() {
        let json = r#"{
            "id": "a1",
            "name": "Ylva",
            "type": "character",
            "attributes": { "wits": { "label": "ATTRIBUTE.WITS" } },
            "skills": { "lore": { "label": "SKILL.LORE", "value": 1 } },
            "conditions": { "hungry": { "label": "CONDITION.HUNGRY" } },
            "armor": { "value": 4 }
        }"#;
        let character: Character = serde_json::from_str(json).unwrap();

        assert_eq!(character.attributes["wits"].value, 0);
        assert_eq!(character.skills["lore"].attribute, "");
        assert!(!character.conditions["hungry"].value);
        assert_eq!(character.armor.value, 4);
        assert_eq!(character.armor.max, 0);
    }
}
