use serde_json::{Map, Value};

use crate::domain::session::{SessionOutcome, SessionUser};

// Phrase some backends put in `message` instead of an explicit status.
const AUTH_FAILED_PHRASE: &str = "authentication failed";

// Flags any of which marks a session as logged in.
const SUCCESS_FLAGS: [&str; 3] = ["ok", "success", "loggedIn"];

// Keys read into SessionUser's named fields.
const USER_KEYS: [&str; 3] = ["username", "lang", "email"];

// Placeholder strings that leak out of browser storage and mean "no token".
const PLACEHOLDER_TOKENS: [&str; 2] = ["null", "undefined"];

// Returns the token when it is a real value rather than an empty/placeholder string.
pub fn usable_token(token: Option<&str>) -> Option<&str> {
    token.filter(|token| !token.is_empty() && !PLACEHOLDER_TOKENS.contains(token))
}

// Loose truthiness as the session backends use it.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// Collapse the many accepted session-check shapes into one outcome.
pub fn normalize_session_body(parsed: &Map<String, Value>) -> SessionOutcome {
    if signals_invalid_token(parsed) {
        return SessionOutcome::InvalidToken;
    }

    let authenticated = parsed.get("status").and_then(Value::as_str) == Some("authenticated")
        || SUCCESS_FLAGS
            .iter()
            .any(|flag| parsed.get(*flag).is_some_and(is_truthy));

    if !authenticated {
        return SessionOutcome::Unauthenticated;
    }

    SessionOutcome::Authenticated {
        user: derive_user(parsed),
    }
}

fn signals_invalid_token(parsed: &Map<String, Value>) -> bool {
    if parsed.get("status").and_then(Value::as_str) == Some("invalid_token") {
        return true;
    }
    parsed
        .get("message")
        .and_then(Value::as_str)
        .is_some_and(|message| message.to_lowercase().contains(AUTH_FAILED_PHRASE))
}

fn derive_user(parsed: &Map<String, Value>) -> Option<SessionUser> {
    for key in ["user", "session"] {
        if let Some(Value::Object(record)) = parsed.get(key) {
            return Some(user_from_record(record));
        }
    }

    // Fallback to flat top-level fields.
    let username = string_field(parsed, "username");
    let lang = string_field(parsed, "lang");
    let email = string_field(parsed, "email");

    if username.is_none() && lang.is_none() && email.is_none() {
        return None;
    }

    Some(SessionUser {
        username,
        lang,
        email,
        extra: Map::new(),
    })
}

fn user_from_record(record: &Map<String, Value>) -> SessionUser {
    let extra = record
        .iter()
        .filter(|(key, _)| !USER_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    SessionUser {
        username: string_field(record, "username"),
        lang: string_field(record, "lang"),
        email: string_field(record, "email"),
        extra,
    }
}

fn string_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    record.get(key).and_then(field_as_string)
}

fn field_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
