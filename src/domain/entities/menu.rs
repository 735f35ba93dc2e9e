//! Menu tree - tabs, groups and actions handed to the host for rendering

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ActionPayload, ActionType, TooltipDirection};

/// Top-level tab a group nests under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Character,
    Combat,
    Spells,
    Conditions,
    Consumables,
    Utility,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Self::Character,
        Self::Combat,
        Self::Spells,
        Self::Conditions,
        Self::Consumables,
        Self::Utility,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Combat => "combat",
            Self::Spells => "spells",
            Self::Conditions => "conditions",
            Self::Consumables => "consumables",
            Self::Utility => "utility",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Character => "HEADER.ATTRIBUTES",
            Self::Combat => "TAB.COMBAT",
            Self::Spells => "HEADER.SPELL",
            Self::Conditions => "HEADER.CONDITION",
            Self::Consumables => "HEADER.CONSUMABLE",
            Self::Utility => "tokenActionHud.utility",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    /// Groups defined by this system module (as opposed to user-created ones)
    #[default]
    System,
}

/// Group descriptor passed to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupData {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub group_type: GroupType,
}

impl GroupData {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group_type: GroupType::System,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tooltip {
    /// Rendered HTML summary
    pub content: String,
    pub class: String,
    pub direction: TooltipDirection,
}

/// Small inline text shown on the action button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoBadge {
    #[serde(default)]
    pub class: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionState {
    /// Rendered as a toggle button
    pub toggle: bool,
    /// Toggle is switched on / condition is applied
    pub active: bool,
}

impl ActionState {
    pub fn active(active: bool) -> Self {
        Self {
            toggle: false,
            active,
        }
    }

    pub fn css_class(&self) -> String {
        match (self.toggle, self.active) {
            (true, true) => "toggle active".to_string(),
            (true, false) => "toggle".to_string(),
            (false, true) => "active".to_string(),
            (false, false) => String::new(),
        }
    }
}

/// A clickable leaf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info1: Option<InfoBadge>,
    pub state: ActionState,
    pub css_class: String,
    pub system: ActionPayload,
    /// `system` run through the identifier codec
    pub encoded_value: String,
}

impl Action {
    pub fn new(action_type: ActionType, id: impl Into<String>, name: impl Into<String>) -> Self {
        let id = id.into();
        let system = ActionPayload::new(action_type, id.clone());
        let encoded_value = system.encode();
        Self {
            id,
            name: name.into(),
            list_name: None,
            tooltip: None,
            img: None,
            info1: None,
            state: ActionState::default(),
            css_class: String::new(),
            system,
            encoded_value,
        }
    }

    pub fn with_tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub fn with_img(mut self, img: Option<&str>) -> Self {
        self.img = img.map(String::from);
        self
    }

    pub fn with_list_name(mut self, list_name: impl Into<String>) -> Self {
        self.list_name = Some(list_name.into());
        self
    }

    pub fn with_info(mut self, info: InfoBadge) -> Self {
        self.info1 = Some(info);
        self
    }

    pub fn with_state(mut self, state: ActionState) -> Self {
        self.css_class = state.css_class();
        self.state = state;
        self
    }
}

/// One category's output: a group, where it nests, and its actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    pub parent: Tab,
    pub group: GroupData,
    pub actions: Vec<Action>,
}

impl MenuGroup {
    pub fn new(parent: Tab, group: GroupData, actions: Vec<Action>) -> Self {
        Self {
            parent,
            group,
            actions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupNode {
    #[serde(flatten)]
    pub group: GroupData,
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabNode {
    pub id: Tab,
    pub groups: Vec<GroupNode>,
}

/// The full tab → group → action tree for one selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTree {
    pub tabs: Vec<TabNode>,
}

impl MenuTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a group under a tab. Re-adding an existing group id is a no-op.
    pub fn add_group(&mut self, group: &GroupData, parent: Tab) {
        let tab = match self.tabs.iter().position(|tab| tab.id == parent) {
            Some(index) => &mut self.tabs[index],
            None => {
                self.tabs.push(TabNode {
                    id: parent,
                    groups: Vec::new(),
                });
                let last = self.tabs.len() - 1;
                &mut self.tabs[last]
            }
        };
        if !tab.groups.iter().any(|node| node.group.id == group.id) {
            tab.groups.push(GroupNode {
                group: group.clone(),
                actions: Vec::new(),
            });
        }
    }

    /// Append actions to a previously registered group; unknown groups drop the actions
    pub fn add_actions(&mut self, actions: Vec<Action>, group: &GroupData) -> bool {
        match self
            .tabs
            .iter_mut()
            .flat_map(|tab| tab.groups.iter_mut())
            .find(|node| node.group.id == group.id)
        {
            Some(node) => {
                node.actions.extend(actions);
                true
            }
            None => false,
        }
    }

    pub fn tab(&self, tab: Tab) -> Option<&TabNode> {
        self.tabs.iter().find(|node| node.id == tab)
    }

    pub fn group(&self, group_id: &str) -> Option<&GroupNode> {
        self.tabs
            .iter()
            .flat_map(|tab| tab.groups.iter())
            .find(|node| node.group.id == group_id)
    }

    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.tabs
            .iter()
            .flat_map(|tab| tab.groups.iter())
            .flat_map(|node| node.actions.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }
}
