use reqwest::Client;
use serde_json::Value;
use tracing::error;

use crate::domain::ChatError;
use crate::interface_adapters::protocol::{ChatMessage, ChatRelayBody, assistant_text};

// Sampling temperature sent with every relayed request.
pub const CHAT_TEMPERATURE: f64 = 0.7;

const PREVIEW_CHARS: usize = 500;

// Client for the relay endpoint served by relay_server.
#[derive(Clone)]
pub struct ChatRelayClient {
    http: Client,
    pub endpoint: String,
}

impl ChatRelayClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    // Send a conversation through the relay and return the assistant text.
    pub async fn send_chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
        system_prompt: &str,
    ) -> Result<String, ChatError> {
        if model.is_empty() {
            return Err(ChatError::MissingModel);
        }
        if messages.is_empty() {
            return Err(ChatError::EmptyMessages);
        }

        let messages = with_system_prompt(messages, system_prompt);
        let res = self
            .http
            .post(&self.endpoint)
            .json(&ChatRelayBody {
                model,
                messages: &messages,
                temperature: CHAT_TEMPERATURE,
            })
            .send()
            .await
            .map_err(|err| {
                error!(error = %err, endpoint = %self.endpoint, "chat relay request failed");
                ChatError::Transport(err)
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|err| {
            error!(error = %err, status = status.as_u16(), "failed to read chat relay body");
            ChatError::Transport(err)
        })?;

        if !status.is_success() {
            let body_preview = preview(&body);
            error!(status = status.as_u16(), %body_preview, "chat relay returned an error");
            return Err(ChatError::Upstream {
                status: status.as_u16(),
                body_preview,
            });
        }

        // Only a body that is not JSON at all is a decode failure.
        let parsed: Value = serde_json::from_str(&body).map_err(|err| {
            let preview = preview(&body);
            error!(error = %err, status = status.as_u16(), %preview, "chat relay returned non-JSON");
            ChatError::Decode {
                status: status.as_u16(),
                preview,
            }
        })?;

        Ok(assistant_text(&parsed))
    }
}

// Prepend the system prompt unless the conversation already opens with one.
fn with_system_prompt(messages: &[ChatMessage], system_prompt: &str) -> Vec<ChatMessage> {
    let has_system = messages
        .first()
        .is_some_and(|message| message.role == "system");
    if has_system {
        return messages.to_vec();
    }

    let mut out = Vec::with_capacity(messages.len() + 1);
    out.push(ChatMessage::system(system_prompt));
    out.extend_from_slice(messages);
    out
}

fn preview(body: &str) -> String {
    body.chars().take(PREVIEW_CHARS).collect()
}
