// Shared bootstrapping for client integration tests: stub session-check and
// relay endpoints, each bound to an ephemeral port inside the test's own runtime.
#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use serde_json::Value;
use session_client::SessionConfig;
use std::sync::{Arc, Mutex};

// JSON bodies received by a stub, in arrival order.
pub type SeenBodies = Arc<Mutex<Vec<Value>>>;

#[derive(Clone)]
struct StubEndpoint {
    status: StatusCode,
    body: String,
    seen: SeenBodies,
}

async fn stub_reply(State(stub): State<StubEndpoint>, Json(body): Json<Value>) -> impl IntoResponse {
    stub.seen.lock().expect("seen mutex poisoned").push(body);
    (
        stub.status,
        [(header::CONTENT_TYPE, "application/json")],
        stub.body.clone(),
    )
}

async fn spawn_stub(path: &str, status: StatusCode, body: &str) -> (String, SeenBodies) {
    let seen: SeenBodies = Arc::new(Mutex::new(Vec::new()));
    let stub = StubEndpoint {
        status,
        body: body.to_string(),
        seen: seen.clone(),
    };
    let app = Router::new().route(path, post(stub_reply)).with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral stub port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server failed");
    });

    (format!("http://{addr}"), seen)
}

// Start a fake session-check backend that always answers with `body`.
pub async fn spawn_session_backend(status: StatusCode, body: &str) -> (String, SeenBodies) {
    spawn_stub("/api/check_session.php", status, body).await
}

// Start a fake relay that always answers with `body`.
pub async fn spawn_relay_stub(status: StatusCode, body: &str) -> (String, SeenBodies) {
    spawn_stub("/backend/openai_chat.php", status, body).await
}

// Config pointing at the given stubs, with the token file inside `dir`.
pub fn config_for(session_base: &str, relay_base: &str, dir: &std::path::Path) -> SessionConfig {
    SessionConfig {
        session_api_base_url: session_base.to_string(),
        relay_base_url: relay_base.to_string(),
        token_path: dir.join("session.json"),
        ..SessionConfig::default()
    }
}

// Base URL nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");
    drop(listener);
    format!("http://{addr}")
}
