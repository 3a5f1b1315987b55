pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::{
    AdapterError, AuthAdapter, AuthFailure, AuthenticationOutcome, ChatError, Location,
    SessionResult, SessionStatus, SessionUser, TokenStore,
};
pub use frameworks::client::SessionClient;
pub use frameworks::config::SessionConfig;
pub use interface_adapters::clients::ChatRelayClient;
pub use interface_adapters::protocol::ChatMessage;
