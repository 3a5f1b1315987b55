use serde_json::{Map, Value};
use tracing::{error, info, warn};

use crate::domain::{
    AdapterError, AuthAdapter, AuthFailure, AuthenticationOutcome, Location, SessionTransport,
};
use crate::use_cases::check_session::CheckSessionUseCase;
use crate::use_cases::login_redirect::LoginRedirect;

// In-app routes the flow navigates between.
#[derive(Debug, Clone)]
pub struct AuthRoutes {
    pub login: String,
    pub home: String,
}

impl Default for AuthRoutes {
    fn default() -> Self {
        Self {
            login: "/login".to_string(),
            home: "/".to_string(),
        }
    }
}

// Keeps the loading indicator on for as long as it lives.
struct LoadingGuard<'a, A: AuthAdapter> {
    adapter: &'a A,
}

impl<'a, A: AuthAdapter> LoadingGuard<'a, A> {
    fn activate(adapter: &'a A) -> Self {
        adapter.set_loading(true);
        Self { adapter }
    }
}

impl<A: AuthAdapter> Drop for LoadingGuard<'_, A> {
    fn drop(&mut self) {
        self.adapter.set_loading(false);
    }
}

// Authentication orchestration use case with injected dependencies.
pub struct AuthenticateUseCase<T, A, L> {
    pub check: CheckSessionUseCase<T>,
    pub adapter: A,
    pub login: LoginRedirect<L>,
    pub routes: AuthRoutes,
}

impl<T, A, L> AuthenticateUseCase<T, A, L>
where
    T: SessionTransport,
    A: AuthAdapter,
    L: Location,
{
    // Returns None whenever the user is not authenticated; never errors.
    pub async fn execute(&self, token: Option<&str>) -> Option<AuthenticationOutcome> {
        let _loading = LoadingGuard::activate(&self.adapter);

        match self.run(token).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(error = %err, "authentication flow failed");
                self.adapter.on_failed(&AuthFailure::Unexpected(err));
                self.login.redirect_to_login();
                None
            }
        }
    }

    async fn run(&self, token: Option<&str>) -> Result<Option<AuthenticationOutcome>, AdapterError> {
        let session = self.check.execute(token, Map::new()).await;

        if !session.is_authenticated() {
            info!(status = session.status.as_str(), "session not authenticated");
            self.adapter.on_failed(&AuthFailure::Status(session.status));
            self.adapter.navigate(&self.routes.login)?;
            return Ok(None);
        }

        let (user_data, dates_data) = match session.username() {
            Some(username) => self.fetch_auxiliary(username).await,
            None => (None, None),
        };

        if let Some(user) = &session.user {
            self.adapter.set_session(user)?;
        }

        if self.adapter.current_route().as_deref() == Some(self.routes.login.as_str()) {
            self.adapter.navigate(&self.routes.home)?;
        }

        info!(username = session.username().unwrap_or_default(), "session authenticated");
        self.adapter.on_authenticated(&session);

        Ok(Some(AuthenticationOutcome {
            session,
            user_data,
            dates_data,
        }))
    }

    // Profile and dates load together; a failure in either is not fatal.
    async fn fetch_auxiliary(&self, username: &str) -> (Option<Value>, Option<Value>) {
        let (profile, dates) = tokio::join!(
            self.adapter.fetch_profile(username),
            self.adapter.fetch_dates(username)
        );

        let profile = profile
            .inspect_err(|e| warn!(error = %e, %username, "failed to fetch user profile"))
            .ok();
        let dates = dates
            .inspect_err(|e| warn!(error = %e, %username, "failed to fetch user dates"))
            .ok();

        (profile, dates)
    }
}
