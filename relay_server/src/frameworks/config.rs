use std::{
    collections::HashMap,
    env,
    net::{IpAddr, Ipv4Addr},
    path::{Path, PathBuf},
};

// Runtime/server configuration read from the environment.

// Name of the credential injected into upstream calls.
pub const API_KEY_NAME: &str = "OPENAI_API_KEY";

// .env files read for the credential, in priority order.
pub const ENV_FILES: [&str; 2] = ["relay_server/.env", ".env"];

// Local dev origins (Vite and Apache) allowed by default.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "http://localhost",
    "http://127.0.0.1",
];

pub fn http_port() -> u16 {
    env::var("RELAY_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3004)
}

pub fn bind_addr() -> IpAddr {
    env::var("RELAY_BIND_ADDR")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

pub fn openai_base_url() -> String {
    env::var("OPENAI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com".to_string())
}

pub fn allowed_origins() -> Vec<String> {
    match env::var("RELAY_ALLOWED_ORIGINS") {
        Ok(value) if !value.trim().is_empty() => parse_origins(&value),
        _ => DEFAULT_ALLOWED_ORIGINS
            .iter()
            .map(|origin| origin.to_string())
            .collect(),
    }
}

pub fn fallback_env_file() -> Option<PathBuf> {
    env::var("RELAY_FALLBACK_ENV_FILE").ok().map(PathBuf::from)
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

// Populate the process env from env files in priority order. Variables that
// are already set are never overwritten, so earlier files win.
pub fn load_env_files<P: AsRef<Path>>(paths: &[P]) {
    for path in paths {
        let path = path.as_ref();
        match dotenvy::from_path(path) {
            Ok(()) => tracing::debug!(path = %path.display(), "loaded env file"),
            Err(e) if e.not_found() => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load env file");
            }
        }
    }
}

// Read KEY=VALUE pairs from an env file without touching the process env.
// Earlier entries win, matching the "only set if not already set" rule.
pub fn read_env_files<P: AsRef<Path>>(paths: &[P]) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for path in paths {
        let path = path.as_ref();
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(_) => continue,
        };
        for item in iter {
            match item {
                Ok((key, value)) => {
                    let slot = values.entry(key).or_insert_with(String::new);
                    if slot.is_empty() {
                        *slot = value;
                    }
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping malformed env line");
                }
            }
        }
    }
    values
}
