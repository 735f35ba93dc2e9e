//! Inbound ports - Capabilities the HUD offers to the host framework
//!
//! The host calls `MenuBuilder` on every selection or data change and
//! `ActionDispatcher` on every click, hover and group click.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::dto::{ClickEvent, SelectionContext};
use crate::application::ports::outbound::HudHostPort;
use crate::domain::entities::GroupData;

pub trait MenuBuilder: Send + Sync {
    /// `buildMenuTree` - emit every group and action for the selection into `host`
    fn build_menu_tree(&self, selection: &SelectionContext, host: &mut dyn HudHostPort);
}

#[async_trait]
pub trait ActionDispatcher: Send + Sync {
    /// `handleClick` - `encoded_value` is the payload of the clicked action
    async fn handle_click(
        &self,
        encoded_value: &str,
        event: &ClickEvent,
        selection: &SelectionContext,
    ) -> Result<()>;

    /// `handleHover`
    async fn handle_hover(&self, encoded_value: &str, event: &ClickEvent) -> Result<()>;

    /// `handleGroupClick`
    async fn handle_group_click(&self, group: &GroupData, event: &ClickEvent) -> Result<()>;
}
