use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use url::Url;

use crate::domain::{TokenStore, usable_token};

// Query parameter carrying a freshly issued token.
const TOKEN_PARAM: &str = "au";
// Query parameter carrying the advisory origin hint.
const ORIGIN_PARAM: &str = "og";

// Per-page-load client context: the persisted token slot, the page URL
// and what was learned from it.
pub struct ClientSession {
    store: Arc<dyn TokenStore>,
    page_url: Option<Url>,
    url_params_consumed: AtomicBool,
    origin_hint: Mutex<Option<String>>,
}

impl ClientSession {
    pub fn new(store: Arc<dyn TokenStore>, page_url: Option<Url>) -> Self {
        Self {
            store,
            page_url,
            url_params_consumed: AtomicBool::new(false),
            origin_hint: Mutex::new(None),
        }
    }

    // Resolve the token to use: explicit value first, then the persisted one.
    pub fn acquire_token(&self, explicit: Option<&str>) -> Option<String> {
        if !self.url_params_consumed.swap(true, Ordering::SeqCst) {
            self.consume_url_params();
        }

        if let Some(token) = usable_token(explicit) {
            return Some(token.to_string());
        }

        match self.store.load() {
            Ok(persisted) => usable_token(persisted.as_deref()).map(str::to_string),
            Err(e) => {
                warn!(error = %e, "failed to read persisted token");
                None
            }
        }
    }

    // Origin hint from the `og` parameter; informational only.
    pub fn origin_hint(&self) -> Option<String> {
        self.origin_hint
            .lock()
            .ok()
            .and_then(|hint| hint.clone())
    }

    // Drop the persisted token after the backend rejected it.
    pub fn purge_token(&self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to purge persisted token");
        }
    }

    fn consume_url_params(&self) {
        let Some(url) = &self.page_url else {
            return;
        };

        let mut token = None;
        let mut origin = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                TOKEN_PARAM => token = Some(value.into_owned()),
                ORIGIN_PARAM => origin = Some(value.into_owned()),
                _ => {}
            }
        }

        let Some(token) = token.filter(|token| usable_token(Some(token.as_str())).is_some()) else {
            return;
        };

        debug!(has_origin_hint = origin.is_some(), "token received via url");
        if let Err(e) = self.store.save(&token) {
            warn!(error = %e, "failed to persist token from url");
        }
        if let Ok(mut hint) = self.origin_hint.lock() {
            *hint = origin;
        }
    }
}
