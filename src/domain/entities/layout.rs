//! Default HUD layout seeded by the host the first time the module is enabled

use serde::{Deserialize, Serialize};

use crate::domain::entities::Tab;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutGroup {
    pub id: String,
    pub nest_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutTab {
    pub id: Tab,
    pub nest_id: String,
    pub name: String,
    pub groups: Vec<LayoutGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub tabs: Vec<LayoutTab>,
}

impl Layout {
    /// Layout with untranslated name keys; `translate` maps each key to display text
    pub fn default_with(translate: impl Fn(&str) -> String) -> Self {
        let group = |tab: Tab, id: &str, name_key: &str| LayoutGroup {
            id: id.to_string(),
            nest_id: format!("{}_{}", tab.id(), id),
            name: translate(name_key),
        };

        let tabs = Tab::ALL
            .iter()
            .map(|&tab| {
                let groups = match tab {
                    Tab::Character => vec![
                        group(tab, "attributes", "HEADER.ATTRIBUTES"),
                        group(tab, "skills", "HEADER.SKILLS"),
                    ],
                    Tab::Combat => vec![
                        group(tab, "weapons", "HEADER.WEAPONS"),
                        group(tab, "armors", "HEADER.ARMORS"),
                    ],
                    Tab::Spells => (1..=3)
                        .map(|rank| group(tab, &format!("spells_rank_{rank}"), "HEADER.SPELL"))
                        .collect(),
                    Tab::Conditions => vec![group(tab, "conditions", "HEADER.CONDITION")],
                    Tab::Consumables => vec![group(tab, "consumables", "HEADER.CONSUMABLE")],
                    Tab::Utility => vec![group(tab, "token", "tokenActionHud.token")],
                };
                LayoutTab {
                    id: tab,
                    nest_id: tab.id().to_string(),
                    name: translate(tab.label_key()),
                    groups,
                }
            })
            .collect();

        Self { tabs }
    }
}
