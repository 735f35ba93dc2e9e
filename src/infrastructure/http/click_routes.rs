use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::application::dto::{ClickEvent, SelectionContext};
use crate::application::ports::inbound::ActionDispatcher;
use crate::infrastructure::host_commands::{HostCommand, HostCommandLog};
use crate::infrastructure::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickRequest {
    pub encoded_value: String,
    #[serde(default)]
    pub event: ClickEvent,
    #[serde(default)]
    pub selection: SelectionContext,
}

/// Operations the host must perform, in order
#[derive(Debug, Serialize)]
pub struct ClickResponse {
    pub commands: Vec<HostCommand>,
}

pub async fn handle_click(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ClickRequest>,
) -> Result<Json<ClickResponse>, (StatusCode, String)> {
    let log = HostCommandLog::new();
    state
        .dispatcher(&log)
        .handle_click(&request.encoded_value, &request.event, &request.selection)
        .await
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(ClickResponse {
        commands: log.take().await,
    }))
}
