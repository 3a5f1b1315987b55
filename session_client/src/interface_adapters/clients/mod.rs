// The clients defined here are for reqwest clients to communicate with external services.

pub mod chat_relay;
pub mod session_api;

pub use chat_relay::ChatRelayClient;
pub use session_api::SessionApiClient;
