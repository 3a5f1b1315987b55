use crate::interface_adapters::handlers::{chat::relay_chat, health::health};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub fn app(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.allowed_origins);

    // Wire the HTTP routes to their handlers.
    // The .php alias keeps existing browser clients working unchanged.
    Router::new()
        .route("/backend/openai_chat", post(relay_chat))
        .route("/backend/openai_chat.php", post(relay_chat))
        .route("/health", get(health))
        .layer(cors)
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring malformed CORS origin.");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}
