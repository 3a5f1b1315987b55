use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::{ChatCompletionPayload, ChatUpstream, CredentialSource, UpstreamReply};

pub(crate) type UpstreamCalls = Arc<Mutex<Vec<(String, ChatCompletionPayload)>>>;

// Fake upstream that records every forwarded call.
#[derive(Clone)]
pub(crate) struct RecordingUpstream {
    calls: UpstreamCalls,
    reply: Result<UpstreamReply, String>,
}

impl RecordingUpstream {
    pub(crate) fn replying(status: u16, body: &str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            reply: Ok(UpstreamReply {
                status,
                body: body.as_bytes().to_vec(),
            }),
        }
    }

    pub(crate) fn failing(detail: &str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            reply: Err(detail.to_string()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, ChatCompletionPayload)> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }
}

#[async_trait]
impl ChatUpstream for RecordingUpstream {
    async fn complete(
        &self,
        api_key: &str,
        payload: &ChatCompletionPayload,
    ) -> Result<UpstreamReply, String> {
        let mut guard = self.calls.lock().expect("calls mutex poisoned");
        guard.push((api_key.to_string(), payload.clone()));
        self.reply.clone()
    }
}

// Credential source with a fixed answer.
#[derive(Clone)]
pub(crate) struct FixedCredentials(Option<String>);

impl FixedCredentials {
    pub(crate) fn with_key(key: &str) -> Self {
        Self(Some(key.to_string()))
    }

    pub(crate) fn missing() -> Self {
        Self(None)
    }
}

impl CredentialSource for FixedCredentials {
    fn api_key(&self) -> Option<String> {
        self.0.clone()
    }
}
