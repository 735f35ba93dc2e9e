use std::sync::Arc;

use axum::{extract::State, Json};

use crate::application::dto::SelectionContext;
use crate::domain::entities::{Layout, MenuTree};
use crate::infrastructure::state::AppState;

pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<Layout> {
    Json(state.registration.default_layout.clone())
}

pub async fn build_menu(
    State(state): State<Arc<AppState>>,
    Json(selection): Json<SelectionContext>,
) -> Json<MenuTree> {
    Json(state.menu.build(&selection))
}
