// Shared bootstrapping for relay integration tests: a stub upstream and a relay
// instance, each bound to an ephemeral port inside the test's own runtime.
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use relay_server::interface_adapters::clients::OpenAiClient;
use relay_server::interface_adapters::credentials::LayeredCredentialSource;
use relay_server::interface_adapters::state::AppState;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// Requests seen by the stub upstream: (authorization header, json body).
pub type SeenRequests = Arc<Mutex<Vec<(String, Value)>>>;

// Key name nobody sets in a real environment, so only the fallback layer answers.
pub const TEST_KEY_NAME: &str = "RELAY_INTEGRATION_TEST_API_KEY";

#[derive(Clone)]
struct StubUpstream {
    status: StatusCode,
    body: Value,
    seen: SeenRequests,
}

async fn stub_completions(
    State(stub): State<StubUpstream>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    stub.seen
        .lock()
        .expect("seen mutex poisoned")
        .push((authorization, body));
    (stub.status, Json(stub.body.clone()))
}

// Start a fake chat completions API and return its base URL.
pub async fn spawn_stub_upstream(status: StatusCode, body: Value) -> (String, SeenRequests) {
    let seen: SeenRequests = Arc::new(Mutex::new(Vec::new()));
    let stub = StubUpstream {
        status,
        body,
        seen: seen.clone(),
    };
    let app = Router::new()
        .route("/v1/chat/completions", post(stub_completions))
        .with_state(stub);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral upstream port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub upstream failed");
    });

    (format!("http://{addr}"), seen)
}

// Start the relay against the given upstream and return its base URL.
pub async fn spawn_relay(upstream_base_url: &str, api_key: Option<&str>) -> String {
    let fallback: HashMap<String, String> = api_key
        .map(|key| HashMap::from([(TEST_KEY_NAME.to_string(), key.to_string())]))
        .unwrap_or_default();
    let state = Arc::new(AppState {
        upstream: Arc::new(OpenAiClient::new(upstream_base_url)),
        credentials: Arc::new(
            LayeredCredentialSource::new(TEST_KEY_NAME).with_fallback_values(fallback),
        ),
        allowed_origins: vec!["http://localhost:5173".to_string()],
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral relay port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        relay_server::serve(listener, state)
            .await
            .expect("relay server failed");
    });

    format!("http://{addr}")
}
