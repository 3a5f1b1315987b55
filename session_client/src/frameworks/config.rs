use std::{env, path::PathBuf};

// Client configuration read from the environment.

pub const DEFAULT_SESSION_API_BASE_URL: &str = "http://localhost";
pub const DEFAULT_SESSION_CHECK_PATH: &str = "/api/check_session.php";
pub const DEFAULT_TOKEN_PATH: &str = ".mooai/session.json";
pub const DEFAULT_RELAY_BASE_URL: &str = "http://127.0.0.1:3004";
pub const RELAY_CHAT_PATH: &str = "/backend/openai_chat.php";

pub const DEFAULT_LOGIN_URL_LOCAL: &str = "http://localhost/mapmoo/login.php?site=mooai";
pub const DEFAULT_LOGIN_URL_REMOTE: &str = "https://liap.ca/login.php?site=mooai";

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub session_api_base_url: String,
    pub session_check_path: String,
    pub token_path: PathBuf,
    pub relay_base_url: String,
    pub login_url_local: String,
    pub login_url_remote: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_api_base_url: DEFAULT_SESSION_API_BASE_URL.to_string(),
            session_check_path: DEFAULT_SESSION_CHECK_PATH.to_string(),
            token_path: PathBuf::from(DEFAULT_TOKEN_PATH),
            relay_base_url: DEFAULT_RELAY_BASE_URL.to_string(),
            login_url_local: DEFAULT_LOGIN_URL_LOCAL.to_string(),
            login_url_remote: DEFAULT_LOGIN_URL_REMOTE.to_string(),
        }
    }
}

impl SessionConfig {
    // Unset or blank variables keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            session_api_base_url: var_or("SESSION_API_BASE_URL", defaults.session_api_base_url),
            session_check_path: var_or("SESSION_CHECK_PATH", defaults.session_check_path),
            token_path: non_blank_var("SESSION_TOKEN_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.token_path),
            relay_base_url: var_or("RELAY_BASE_URL", defaults.relay_base_url),
            login_url_local: var_or("LOGIN_URL_LOCAL", defaults.login_url_local),
            login_url_remote: var_or("LOGIN_URL_REMOTE", defaults.login_url_remote),
        }
    }

    pub fn session_check_url(&self) -> String {
        join_url(&self.session_api_base_url, &self.session_check_path)
    }

    pub fn relay_chat_url(&self) -> String {
        join_url(&self.relay_base_url, RELAY_CHAT_PATH)
    }
}

fn non_blank_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn var_or(name: &str, default: String) -> String {
    non_blank_var(name).unwrap_or(default)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
