use crate::domain::{ChatUpstream, CredentialSource};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub upstream: Arc<dyn ChatUpstream>,
    pub credentials: Arc<dyn CredentialSource>,
    // Browser origins allowed to call the relay with credentials.
    pub allowed_origins: Vec<String>,
}
