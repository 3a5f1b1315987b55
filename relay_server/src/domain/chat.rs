use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

// Sampling temperature used when the client does not send one.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

// The serialization within this layer is a dependency leak, but its a pragmatic approach.
// Validated payload forwarded to the upstream chat completion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionPayload {
    pub model: String,
    // Message objects are forwarded exactly as the client sent them.
    pub messages: Vec<Value>,
    pub temperature: f64,
}

// Whatever the upstream answered, kept raw so the relay can pass it through.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Vec<u8>,
}

// The relay depends on this trait, not the concrete HTTP client.
// Err carries the transport failure detail when no response was received.
#[async_trait]
pub trait ChatUpstream: Send + Sync {
    async fn complete(
        &self,
        api_key: &str,
        payload: &ChatCompletionPayload,
    ) -> Result<UpstreamReply, String>;
}

// Port for resolving the server-held API credential.
pub trait CredentialSource: Send + Sync {
    // Returns None when the credential is missing or blank.
    fn api_key(&self) -> Option<String>;
}

#[async_trait]
impl<T: ChatUpstream + ?Sized> ChatUpstream for Arc<T> {
    async fn complete(
        &self,
        api_key: &str,
        payload: &ChatCompletionPayload,
    ) -> Result<UpstreamReply, String> {
        (**self).complete(api_key, payload).await
    }
}

impl<T: CredentialSource + ?Sized> CredentialSource for Arc<T> {
    fn api_key(&self) -> Option<String> {
        (**self).api_key()
    }
}
