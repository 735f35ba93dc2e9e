//! HUD host port - where finished groups and actions are handed over for rendering

use crate::domain::entities::{Action, GroupData, MenuTree, Tab};

pub trait HudHostPort {
    /// `addGroup` - register a group under its parent tab
    fn add_group(&mut self, group: &GroupData, parent: Tab);

    /// `addActions` - append actions to a registered group
    fn add_actions(&mut self, actions: Vec<Action>, group: &GroupData);
}

impl HudHostPort for MenuTree {
    fn add_group(&mut self, group: &GroupData, parent: Tab) {
        MenuTree::add_group(self, group, parent);
    }

    fn add_actions(&mut self, actions: Vec<Action>, group: &GroupData) {
        if !MenuTree::add_actions(self, actions, group) {
            tracing::warn!(group_id = %group.id, "Actions added to an unregistered group were dropped");
        }
    }
}
