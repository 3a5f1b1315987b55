use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::AdapterError;
use crate::domain::session::{AuthFailure, SessionResult, SessionUser};

// Port for the single persisted-token slot.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, String>;
    fn save(&self, token: &str) -> Result<(), String>;
    fn clear(&self) -> Result<(), String>;
}

// Port for the session-check call. Ok carries the raw response body text,
// whatever its HTTP status; Err carries the transport failure message.
#[async_trait]
pub trait SessionTransport: Send + Sync {
    async fn post_session_check(&self, payload: &Value) -> Result<String, String>;
}

// Port for full-page navigation outside the app.
pub trait Location: Send + Sync {
    fn hostname(&self) -> String;
    fn assign(&self, url: &str);
}

// UI-side collaborators of the authentication flow, implemented once per UI framework.
#[async_trait]
pub trait AuthAdapter: Send + Sync {
    // Current in-app route, when the UI has a router.
    fn current_route(&self) -> Option<String>;
    fn navigate(&self, route: &str) -> Result<(), AdapterError>;
    fn set_session(&self, user: &SessionUser) -> Result<(), AdapterError>;
    async fn fetch_profile(&self, username: &str) -> Result<Value, AdapterError>;
    async fn fetch_dates(&self, username: &str) -> Result<Value, AdapterError>;

    fn set_loading(&self, _active: bool) {}
    fn on_authenticated(&self, _result: &SessionResult) {}
    fn on_failed(&self, _failure: &AuthFailure) {}
}
