use crate::domain::CredentialSource;
use std::collections::HashMap;

// Layered credential lookup: process environment first, then values read from
// .env files, then the request-scope fallback map. First non-blank value wins.
#[derive(Clone, Debug, Default)]
pub struct LayeredCredentialSource {
    pub key_name: String,
    pub dotenv_values: HashMap<String, String>,
    pub fallback_values: HashMap<String, String>,
}

impl LayeredCredentialSource {
    pub fn new(key_name: impl Into<String>) -> Self {
        Self {
            key_name: key_name.into(),
            ..Default::default()
        }
    }

    pub fn with_dotenv_values(mut self, values: HashMap<String, String>) -> Self {
        self.dotenv_values = values;
        self
    }

    pub fn with_fallback_values(mut self, values: HashMap<String, String>) -> Self {
        self.fallback_values = values;
        self
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl CredentialSource for LayeredCredentialSource {
    fn api_key(&self) -> Option<String> {
        std::env::var(&self.key_name)
            .ok()
            .and_then(|value| non_blank(&value))
            .or_else(|| {
                self.dotenv_values
                    .get(&self.key_name)
                    .and_then(|value| non_blank(value))
            })
            .or_else(|| {
                self.fallback_values
                    .get(&self.key_name)
                    .and_then(|value| non_blank(value))
            })
    }
}
