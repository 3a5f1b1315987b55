use std::fmt;

// Failure reported by a UI adapter hook or auxiliary fetcher.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterError {
    pub message: String,
}

impl AdapterError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "adapter error: {}", self.message)
    }
}

impl std::error::Error for AdapterError {}

// Failure reading or writing the persisted token file.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Corrupt(serde_json::Error),
    Poisoned,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "token store io error: {err}"),
            StoreError::Corrupt(err) => write!(f, "token store file is corrupt: {err}"),
            StoreError::Poisoned => write!(f, "token store lock poisoned"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Corrupt(err)
    }
}

// Errors surfaced by the chat relay client.
#[derive(Debug)]
pub enum ChatError {
    MissingModel,
    EmptyMessages,
    Transport(reqwest::Error),
    Upstream { status: u16, body_preview: String },
    Decode { status: u16, preview: String },
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::MissingModel => write!(f, "missing model"),
            ChatError::EmptyMessages => write!(f, "messages must be a non-empty array"),
            ChatError::Transport(err) => write!(f, "relay transport error: {err}"),
            ChatError::Upstream {
                status,
                body_preview,
            } => write!(f, "relay error {status}: {body_preview}"),
            ChatError::Decode { status, preview } => write!(
                f,
                "relay returned non-JSON response (status {status}). Preview: {preview}"
            ),
        }
    }
}

impl std::error::Error for ChatError {}
