use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{
    AdapterError, AuthAdapter, AuthFailure, Location, SessionResult, SessionTransport, SessionUser,
    TokenStore,
};

// In-memory token slot that counts writes and can simulate failures.
#[derive(Clone, Default)]
pub(crate) struct RecordingTokenStore {
    slot: Arc<Mutex<Option<String>>>,
    saves: Arc<Mutex<usize>>,
    fail_reads: bool,
}

impl RecordingTokenStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_token(token: &str) -> Self {
        let store = Self::new();
        *store.slot.lock().expect("slot mutex poisoned") = Some(token.to_string());
        store
    }

    pub(crate) fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub(crate) fn current(&self) -> Option<String> {
        self.slot.lock().expect("slot mutex poisoned").clone()
    }

    pub(crate) fn save_count(&self) -> usize {
        *self.saves.lock().expect("saves mutex poisoned")
    }
}

impl TokenStore for RecordingTokenStore {
    fn load(&self) -> Result<Option<String>, String> {
        if self.fail_reads {
            return Err("read failed".to_string());
        }
        Ok(self.current())
    }

    fn save(&self, token: &str) -> Result<(), String> {
        *self.slot.lock().expect("slot mutex poisoned") = Some(token.to_string());
        *self.saves.lock().expect("saves mutex poisoned") += 1;
        Ok(())
    }

    fn clear(&self) -> Result<(), String> {
        *self.slot.lock().expect("slot mutex poisoned") = None;
        Ok(())
    }
}

// Fake session-check endpoint returning a canned body and recording payloads.
#[derive(Clone)]
pub(crate) struct RecordingTransport {
    reply: Result<String, String>,
    payloads: Arc<Mutex<Vec<Value>>>,
}

impl RecordingTransport {
    pub(crate) fn replying(body: &str) -> Self {
        Self {
            reply: Ok(body.to_string()),
            payloads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            payloads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn payloads(&self) -> Vec<Value> {
        self.payloads.lock().expect("payloads mutex poisoned").clone()
    }
}

#[async_trait]
impl SessionTransport for RecordingTransport {
    async fn post_session_check(&self, payload: &Value) -> Result<String, String> {
        self.payloads
            .lock()
            .expect("payloads mutex poisoned")
            .push(payload.clone());
        self.reply.clone()
    }
}

// Every adapter interaction, in call order.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum AdapterEvent {
    Loading(bool),
    Navigate(String),
    SetSession(SessionUser),
    FetchProfile(String),
    FetchDates(String),
    Authenticated(SessionResult),
    Failed(AuthFailure),
}

#[derive(Clone, Copy, Default)]
pub(crate) struct AdapterFailures {
    pub navigate: bool,
    pub set_session: bool,
    pub profile: bool,
    pub dates: bool,
}

#[derive(Clone, Default)]
pub(crate) struct RecordingAdapter {
    events: Arc<Mutex<Vec<AdapterEvent>>>,
    route: Option<String>,
    failures: AdapterFailures,
}

impl RecordingAdapter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn at_route(mut self, route: &str) -> Self {
        self.route = Some(route.to_string());
        self
    }

    pub(crate) fn with_failures(mut self, failures: AdapterFailures) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn events(&self) -> Vec<AdapterEvent> {
        self.events.lock().expect("events mutex poisoned").clone()
    }

    fn record(&self, event: AdapterEvent) {
        self.events
            .lock()
            .expect("events mutex poisoned")
            .push(event);
    }
}

#[async_trait]
impl AuthAdapter for RecordingAdapter {
    fn current_route(&self) -> Option<String> {
        self.route.clone()
    }

    fn navigate(&self, route: &str) -> Result<(), AdapterError> {
        self.record(AdapterEvent::Navigate(route.to_string()));
        if self.failures.navigate {
            return Err(AdapterError::new("router unavailable"));
        }
        Ok(())
    }

    fn set_session(&self, user: &SessionUser) -> Result<(), AdapterError> {
        self.record(AdapterEvent::SetSession(user.clone()));
        if self.failures.set_session {
            return Err(AdapterError::new("store rejected session"));
        }
        Ok(())
    }

    async fn fetch_profile(&self, username: &str) -> Result<Value, AdapterError> {
        self.record(AdapterEvent::FetchProfile(username.to_string()));
        if self.failures.profile {
            return Err(AdapterError::new("profile fetch failed"));
        }
        Ok(serde_json::json!({"username": username, "bio": "hi"}))
    }

    async fn fetch_dates(&self, username: &str) -> Result<Value, AdapterError> {
        self.record(AdapterEvent::FetchDates(username.to_string()));
        if self.failures.dates {
            return Err(AdapterError::new("dates fetch failed"));
        }
        Ok(serde_json::json!(["2026-01-01"]))
    }

    fn set_loading(&self, active: bool) {
        self.record(AdapterEvent::Loading(active));
    }

    fn on_authenticated(&self, result: &SessionResult) {
        self.record(AdapterEvent::Authenticated(result.clone()));
    }

    fn on_failed(&self, failure: &AuthFailure) {
        self.record(AdapterEvent::Failed(failure.clone()));
    }
}

// Browser location fake recording full-page navigations.
#[derive(Clone)]
pub(crate) struct RecordingLocation {
    hostname: String,
    assigned: Arc<Mutex<Vec<String>>>,
}

impl RecordingLocation {
    pub(crate) fn on_host(hostname: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            assigned: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn assigned(&self) -> Vec<String> {
        self.assigned.lock().expect("assigned mutex poisoned").clone()
    }
}

impl Location for RecordingLocation {
    fn hostname(&self) -> String {
        self.hostname.clone()
    }

    fn assign(&self, url: &str) {
        self.assigned
            .lock()
            .expect("assigned mutex poisoned")
            .push(url.to_string());
    }
}
