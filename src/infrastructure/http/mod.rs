//! HTTP API the overlay calls into

mod click_routes;
mod menu_routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::infrastructure::state::AppState;

pub use click_routes::{ClickRequest, ClickResponse};

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/layout", get(menu_routes::get_layout))
        .route("/api/menu", post(menu_routes::build_menu))
        .route("/api/click", post(click_routes::handle_click))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::application::ports::outbound::IdentityTranslator;
    use crate::infrastructure::config::AppConfig;
    use crate::infrastructure::state::AppState;

    pub fn app() -> Router {
        let config = AppConfig {
            server_port: 0,
            locale_path: None,
            host_core_version: "1.5".to_string(),
            hud: Default::default(),
            system: Default::default(),
        };
        let state = AppState::with_translator(config, Arc::new(IdentityTranslator)).unwrap();
        super::create_routes().with_state(Arc::new(state))
    }

    pub async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    pub fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }
}
