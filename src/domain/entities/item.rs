//! Inventory items - weapons, armor, spells and monster attacks

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ItemId;

/// Icons the host assigns to documents without artwork
const PLACEHOLDER_IMAGES: [&str; 2] = ["icons/svg/mystery-man.svg", "icons/svg/item-bag.svg"];

/// Damage as written on the sheet: a flat number or a dice expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Damage {
    Flat(i32),
    Expression(String),
}

impl std::fmt::Display for Damage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flat(value) => write!(f, "{}", value),
            Self::Expression(expr) => f.write_str(expr),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponData {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub damage: Option<Damage>,
    /// Feature flag key to enabled
    #[serde(default)]
    pub features: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bonus {
    pub value: i32,
    pub max: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorData {
    /// Body part covered (`body`, `head`, `shield`)
    #[serde(default)]
    pub part: Option<String>,
    #[serde(default)]
    pub bonus: Bonus,
    #[serde(default)]
    pub features: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellData {
    #[serde(default)]
    pub rank: Option<u8>,
    #[serde(default)]
    pub spell_type: Option<String>,
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub ingredient: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterAttackData {
    #[serde(default)]
    pub damage_type: Option<String>,
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub damage: Option<Damage>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Item kind with its kind-specific data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ItemKind {
    Weapon(WeaponData),
    Armor(ArmorData),
    Spell(SpellData),
    MonsterAttack(MonsterAttackData),
    /// Gear, talents, raw materials... nothing the HUD builds actions for
    #[serde(other)]
    Other,
}

/// An owned item; its id doubles as the menu leaf id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub img: Option<String>,
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            img: None,
            kind,
        }
    }

    pub fn with_img(mut self, img: impl Into<String>) -> Self {
        self.img = Some(img.into());
        self
    }

    /// Artwork worth showing next to the action, skipping host placeholders
    pub fn image(&self) -> Option<&str> {
        self.img
            .as_deref()
            .filter(|img| !img.is_empty() && !PLACEHOLDER_IMAGES.contains(img))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapon_from_host_json() {
        let json = r#"{
            "id": "w1",
            "name": "Broadsword",
            "type": "weapon",
            "category": "blade",
            "range": "arm",
            "damage": 2,
            "features": { "edged": true, "parrying": true, "pointed": false }
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();

        let ItemKind::Weapon(weapon) = &item.kind else {
            panic!("Expected weapon");
        };
        assert_eq!(weapon.category.as_deref(), Some("blade"));
        assert_eq!(weapon.damage, Some(Damage::Flat(2)));
        assert_eq!(weapon.features.len(), 3);
    }

    #[test]
    fn test_armor_bonus_without_max() {
        let json = r#"{"id":"h1","name":"Helmet","type":"armor","part":"head","bonus":{"value":2}}"#;
        let item: Item = serde_json::from_str(json).unwrap();

        let ItemKind::Armor(armor) = &item.kind else {
            panic!("Expected armor");
        };
        assert_eq!(armor.bonus, Bonus { value: 2, max: 0 });
    }

    #[test]
    fn test_unhandled_item_type_is_other() {
        let item: Item = serde_json::from_str(r#"{"id":"g1","name":"Rope","type":"gear"}"#).unwrap();
        assert_eq!(item.kind, ItemKind::Other);
    }

    #[test]
    fn test_damage_display() {
        assert_eq!(Damage::Flat(3).to_string(), "3");
        assert_eq!(Damage::Expression("2D6".to_string()).to_string(), "2D6");
    }

    #[test]
    fn test_placeholder_images_are_hidden() {
        let item = Item::new("w1", "Dagger", ItemKind::Weapon(WeaponData::default()));
        assert_eq!(item.image(), None);
        assert_eq!(item.clone().with_img("icons/svg/mystery-man.svg").image(), None);
        assert_eq!(
            item.with_img("systems/fbl/dagger.webp").image(),
            Some("systems/fbl/dagger.webp")
        );
    }
}
