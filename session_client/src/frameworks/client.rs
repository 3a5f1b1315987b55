use std::sync::Arc;

use serde_json::{Map, Value};
use url::Url;

use crate::domain::{AuthAdapter, Location, SessionResult, TokenStore};
use crate::frameworks::config::SessionConfig;
use crate::interface_adapters::clients::{ChatRelayClient, SessionApiClient};
use crate::interface_adapters::stores::FileTokenStore;
use crate::use_cases::{
    AuthRoutes, AuthenticateUseCase, CheckSessionUseCase, ClientSession, LoginRedirect,
};

// Wires the adapters and use cases for one page load.
pub struct SessionClient {
    config: SessionConfig,
    session: Arc<ClientSession>,
    transport: SessionApiClient,
}

impl SessionClient {
    // Persist the token in the file named by the config.
    pub fn from_config(config: SessionConfig, page_url: Option<Url>) -> Self {
        let store = Arc::new(FileTokenStore::new(config.token_path.clone()));
        Self::with_store(config, store, page_url)
    }

    pub fn with_store(
        config: SessionConfig,
        store: Arc<dyn TokenStore>,
        page_url: Option<Url>,
    ) -> Self {
        let transport = SessionApiClient::new(config.session_check_url());
        Self {
            config,
            session: Arc::new(ClientSession::new(store, page_url)),
            transport,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn session(&self) -> Arc<ClientSession> {
        Arc::clone(&self.session)
    }

    pub fn check_session_use_case(&self) -> CheckSessionUseCase<SessionApiClient> {
        CheckSessionUseCase {
            transport: self.transport.clone(),
            session: self.session(),
        }
    }

    pub async fn check_session(
        &self,
        explicit_token: Option<&str>,
        extra_payload: Map<String, Value>,
    ) -> SessionResult {
        self.check_session_use_case()
            .execute(explicit_token, extra_payload)
            .await
    }

    // Optional login: never redirects, answers only when an identity is known.
    pub async fn ensure_logged_in(&self) -> Option<SessionResult> {
        let result = self.check_session(None, Map::new()).await;
        (result.is_authenticated() && result.user.is_some()).then_some(result)
    }

    pub fn authenticator<A, L>(
        &self,
        adapter: A,
        location: L,
    ) -> AuthenticateUseCase<SessionApiClient, A, L>
    where
        A: AuthAdapter,
        L: Location,
    {
        AuthenticateUseCase {
            check: self.check_session_use_case(),
            adapter,
            login: LoginRedirect {
                location,
                local_url: self.config.login_url_local.clone(),
                remote_url: self.config.login_url_remote.clone(),
            },
            routes: AuthRoutes::default(),
        }
    }

    pub fn chat_client(&self) -> ChatRelayClient {
        ChatRelayClient::new(self.config.relay_chat_url())
    }
}
