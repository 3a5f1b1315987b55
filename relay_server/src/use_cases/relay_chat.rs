use serde_json::Value;

use crate::domain::{
    ChatCompletionPayload, ChatUpstream, CredentialSource, DEFAULT_TEMPERATURE, RelayError,
    UpstreamReply,
};
use crate::interface_adapters::protocol::ChatRelayRequest;

// Chat relay use case with injected dependencies.
pub struct RelayChatUseCase<U, K> {
    pub upstream: U,
    pub credentials: K,
}

impl<U, K> RelayChatUseCase<U, K>
where
    U: ChatUpstream,
    K: CredentialSource,
{
    pub async fn execute(&self, request: ChatRelayRequest) -> Result<UpstreamReply, RelayError> {
        let payload = validate_request(request)?;

        // A missing key is a server misconfiguration, reported before any upstream call.
        let api_key = self
            .credentials
            .api_key()
            .ok_or(RelayError::MissingApiKey)?;

        self.upstream
            .complete(&api_key, &payload)
            .await
            .map_err(RelayError::UpstreamUnreachable)
    }
}

fn validate_request(request: ChatRelayRequest) -> Result<ChatCompletionPayload, RelayError> {
    let model = match request.model {
        Some(Value::String(model)) if !model.is_empty() => model,
        _ => return Err(RelayError::MissingModel),
    };

    let messages = match request.messages {
        Some(Value::Array(messages)) if !messages.is_empty() => messages,
        _ => return Err(RelayError::InvalidMessages),
    };

    let temperature = match request.temperature {
        None => DEFAULT_TEMPERATURE,
        Some(value) => value.as_f64().ok_or(RelayError::InvalidTemperature)?,
    };

    Ok(ChatCompletionPayload {
        model,
        messages,
        temperature,
    })
}
