use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::errors::AdapterError;

// Normalized session status shared by every session-check response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Authenticated,
    Unauthenticated,
    InvalidToken,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Authenticated => "authenticated",
            SessionStatus::Unauthenticated => "unauthenticated",
            SessionStatus::InvalidToken => "invalid_token",
        }
    }
}

// User record attached to an authenticated session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionUser {
    pub username: Option<String>,
    pub lang: Option<String>,
    pub email: Option<String>,
    // Any other fields the backend sent for the user.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Result of the one normalization step over a parsed session-check body.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    // The user is None when the backend confirmed the session but sent no identity.
    Authenticated { user: Option<SessionUser> },
    Unauthenticated,
    InvalidToken,
}

impl SessionOutcome {
    pub fn status(&self) -> SessionStatus {
        match self {
            SessionOutcome::Authenticated { .. } => SessionStatus::Authenticated,
            SessionOutcome::Unauthenticated => SessionStatus::Unauthenticated,
            SessionOutcome::InvalidToken => SessionStatus::InvalidToken,
        }
    }
}

// Normalized outcome of a session check.
//
// `ok` is true exactly when `status` is `Authenticated`, and an
// `InvalidToken` result never carries a user. Fields the backend sent that
// are not overridden here are kept in `extra` and serialized alongside.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    pub ok: bool,
    pub status: SessionStatus,
    pub user: Option<SessionUser>,
    pub received_token: Option<String>,
    // Set when the check short-circuited because no token was available.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub no_api_call: bool,
    // Unparseable response body kept for diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    // Transport failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Keys owned by SessionResult itself; never copied from the backend body.
const OVERRIDDEN_KEYS: [&str; 4] = ["ok", "status", "user", "receivedToken"];

impl SessionResult {
    fn unauthenticated() -> Self {
        Self {
            ok: false,
            status: SessionStatus::Unauthenticated,
            user: None,
            received_token: None,
            no_api_call: false,
            raw: None,
            error: None,
            extra: Map::new(),
        }
    }

    // No usable token anywhere, so no request was made.
    pub fn no_token() -> Self {
        Self {
            no_api_call: true,
            ..Self::unauthenticated()
        }
    }

    // The backend answered with something that is not a JSON object.
    pub fn unparseable(token: &str, raw: String) -> Self {
        Self {
            received_token: Some(token.to_string()),
            raw: Some(raw),
            ..Self::unauthenticated()
        }
    }

    // The request never got an answer.
    pub fn transport_failure(message: String) -> Self {
        Self {
            error: Some(message),
            ..Self::unauthenticated()
        }
    }

    // Merge the normalized outcome over the fields the backend sent.
    pub fn from_parsed(mut parsed: Map<String, Value>, token: &str, outcome: SessionOutcome) -> Self {
        for key in OVERRIDDEN_KEYS {
            parsed.remove(key);
        }

        let status = outcome.status();
        let user = match outcome {
            SessionOutcome::Authenticated { user } => user,
            SessionOutcome::Unauthenticated | SessionOutcome::InvalidToken => None,
        };

        Self {
            ok: status == SessionStatus::Authenticated,
            status,
            user,
            received_token: Some(token.to_string()),
            extra: parsed,
            ..Self::unauthenticated()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    pub fn username(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|user| user.username.as_deref())
            .filter(|username| !username.is_empty())
    }
}

// Result of a full authentication attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticationOutcome {
    pub session: SessionResult,
    // Profile and activity dates; None when not fetched or the fetch failed.
    pub user_data: Option<Value>,
    pub dates_data: Option<Value>,
}

// Reason handed to the adapter when authentication does not succeed.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthFailure {
    // The session check answered with a non-authenticated status.
    Status(SessionStatus),
    // An adapter hook failed while the flow was running.
    Unexpected(AdapterError),
}
