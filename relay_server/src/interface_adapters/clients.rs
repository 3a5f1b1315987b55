use crate::domain::{ChatCompletionPayload, ChatUpstream, UpstreamReply};
use async_trait::async_trait;
use reqwest::Client;

// The clients defined here are for reqwest clients to communicate with external services.
// Thin wrapper around reqwest for the OpenAI chat completions endpoint.
#[derive(Clone)]
pub struct OpenAiClient {
    http: Client,
    pub base_url: String,
}

impl OpenAiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatUpstream for OpenAiClient {
    async fn complete(
        &self,
        api_key: &str,
        payload: &ChatCompletionPayload,
    ) -> Result<UpstreamReply, String> {
        let res = self
            .http
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(payload)
            .send()
            .await
            .map_err(|err| err.to_string())?;
        let status = res.status().as_u16();

        // Upstream error bodies are not interpreted; the caller relays them as-is.
        let body = res.bytes().await.map_err(|err| err.to_string())?;

        Ok(UpstreamReply {
            status,
            body: body.to_vec(),
        })
    }
}
