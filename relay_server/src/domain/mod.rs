mod chat;
mod errors;

// Re-export the domain boundary types and ports.
pub use chat::{
    ChatCompletionPayload, ChatUpstream, CredentialSource, DEFAULT_TEMPERATURE, UpstreamReply,
};
pub use errors::RelayError;
