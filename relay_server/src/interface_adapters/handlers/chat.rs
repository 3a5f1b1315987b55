use crate::domain::{RelayError, UpstreamReply};
use crate::interface_adapters::protocol::{ChatRelayRequest, ErrorResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::RelayChatUseCase;
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

const MISSING_KEY_HINT: &str = "Create relay_server/.env or ./.env with OPENAI_API_KEY=your_key or set the environment variable for the relay process.";

// Relay a chat completion request to the upstream using the server-held key.
#[tracing::instrument(name = "relay_chat", skip_all, fields(body_len = body.len()))]
pub async fn relay_chat(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let request = ChatRelayRequest::from_body(&body).map_err(map_relay_error)?;

    let use_case = RelayChatUseCase {
        upstream: state.upstream.clone(),
        credentials: state.credentials.clone(),
    };

    let reply = use_case.execute(request).await.map_err(map_relay_error)?;

    tracing::info!(upstream_status = reply.status, "chat completion relayed.");
    Ok(passthrough(reply))
}

// Upstream status and body go back untouched.
fn passthrough(reply: UpstreamReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::OK);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
        .into_response()
}

fn map_relay_error(err: RelayError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        RelayError::MissingApiKey => {
            tracing::error!("OPENAI_API_KEY is not configured.");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                    detail: None,
                    hint: Some(MISSING_KEY_HINT.to_string()),
                }),
            )
        }
        RelayError::UpstreamUnreachable(detail) => {
            tracing::error!(error = %detail, "upstream request failed.");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Upstream request failed".to_string(),
                    detail: Some(detail),
                    hint: None,
                }),
            )
        }
        invalid => {
            tracing::warn!(reason = %invalid, "rejected relay request.");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: invalid.to_string(),
                    detail: None,
                    hint: None,
                }),
            )
        }
    }
}
