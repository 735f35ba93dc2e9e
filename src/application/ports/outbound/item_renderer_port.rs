//! Item renderer port - posts an owned item to the shared log

use anyhow::Result;
use async_trait::async_trait;

use crate::application::dto::TargetedActor;

#[async_trait]
pub trait ItemRendererPort: Send + Sync {
    async fn render_item(&self, actor: &TargetedActor, item_id: &str) -> Result<()>;
}
