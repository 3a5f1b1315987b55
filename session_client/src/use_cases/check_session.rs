use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::domain::{SessionOutcome, SessionResult, SessionTransport, normalize_session_body};
use crate::use_cases::client_session::ClientSession;

// Session check use case with injected dependencies.
pub struct CheckSessionUseCase<T> {
    pub transport: T,
    pub session: Arc<ClientSession>,
}

impl<T> CheckSessionUseCase<T>
where
    T: SessionTransport,
{
    // Never fails: every problem folds into a conservative SessionResult.
    pub async fn execute(
        &self,
        explicit_token: Option<&str>,
        extra_payload: Map<String, Value>,
    ) -> SessionResult {
        // Never send an empty credential upstream.
        let Some(token) = self.session.acquire_token(explicit_token) else {
            debug!("no usable token; skipping session check");
            return SessionResult::no_token();
        };

        let mut payload = extra_payload;
        payload.insert("token".to_string(), Value::String(token.clone()));

        let body = match self
            .transport
            .post_session_check(&Value::Object(payload))
            .await
        {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "session check failed");
                return SessionResult::transport_failure(e);
            }
        };

        let parsed = match serde_json::from_str::<Value>(&body) {
            Ok(Value::Object(parsed)) => parsed,
            _ => {
                warn!(body_len = body.len(), "session check returned a non-JSON body");
                return SessionResult::unparseable(&token, body);
            }
        };

        let outcome = normalize_session_body(&parsed);
        if outcome == SessionOutcome::InvalidToken {
            info!("session backend rejected token; purging it");
            self.session.purge_token();
        }

        SessionResult::from_parsed(parsed, &token, outcome)
    }
}
