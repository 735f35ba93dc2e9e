//! Game-system reference data
//!
//! Stands in for the system's global configuration object. The HUD only needs the
//! canonical attribute list and the consumable die-tier table.

use serde::{Deserialize, Serialize};

/// Die tier shown when a consumable's value is absent or outside the table
pub const ZERO_TIER: &str = "0";

/// Reference data of the Forbidden Lands game system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Canonical attribute keys, in presentation order
    pub attributes: Vec<String>,
    /// Die tier per consumable value (index = value)
    pub consumable_dice: Vec<String>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            attributes: ["strength", "agility", "wits", "empathy"]
                .into_iter()
                .map(String::from)
                .collect(),
            consumable_dice: [ZERO_TIER, "D6", "D8", "D10", "D12"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl SystemConfig {
    pub fn is_attribute(&self, key: &str) -> bool {
        self.attributes.iter().any(|attribute| attribute == key)
    }

    /// Translation key of an attribute's display name
    pub fn attribute_label_key(key: &str) -> String {
        format!("ATTRIBUTE.{}", key.to_uppercase())
    }

    pub fn consumable_die(&self, value: Option<i32>) -> &str {
        value
            .and_then(|v| usize::try_from(v).ok())
            .and_then(|index| self.consumable_dice.get(index))
            .map(String::as_str)
            .unwrap_or(ZERO_TIER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_attributes() {
        let config = SystemConfig::default();
        assert!(config.is_attribute("wits"));
        assert!(!config.is_attribute("luck"));
        assert_eq!(SystemConfig::attribute_label_key("wits"), "ATTRIBUTE.WITS");
    }

    #[test]
    fn test_consumable_die_lookup() {
        let config = SystemConfig::default();
        assert_eq!(config.consumable_die(Some(2)), "D8");
        assert_eq!(config.consumable_die(Some(0)), "0");
        assert_eq!(config.consumable_die(Some(9)), ZERO_TIER);
        assert_eq!(config.consumable_die(Some(-1)), ZERO_TIER);
        assert_eq!(config.consumable_die(None), ZERO_TIER);
    }
}
