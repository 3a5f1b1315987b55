mod errors;
mod normalize;
mod ports;
mod session;

// Re-export the domain boundary types and ports.
pub use errors::{AdapterError, ChatError, StoreError};
pub use normalize::{is_truthy, normalize_session_body, usable_token};
pub use ports::{AuthAdapter, Location, SessionTransport, TokenStore};
pub use session::{
    AuthFailure, AuthenticationOutcome, SessionOutcome, SessionResult, SessionStatus, SessionUser,
};
