use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::domain::SessionTransport;

// Thin reqwest client for the session-check endpoint.
#[derive(Clone)]
pub struct SessionApiClient {
    http: Client,
    pub check_url: String,
}

impl SessionApiClient {
    pub fn new(check_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            check_url: check_url.into(),
        }
    }
}

#[async_trait]
impl SessionTransport for SessionApiClient {
    async fn post_session_check(&self, payload: &Value) -> Result<String, String> {
        let res = self
            .http
            .post(&self.check_url)
            .json(payload)
            .send()
            .await
            .map_err(|err| err.to_string())?;

        // The status line is ignored; callers classify the body alone.
        res.text().await.map_err(|err| err.to_string())
    }
}
