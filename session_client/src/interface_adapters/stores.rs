use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::domain::{StoreError, TokenStore};

// On-disk shape of the persisted token.
#[derive(Debug, Serialize, Deserialize)]
struct TokenFile {
    token: String,
}

// Token slot persisted as a small JSON file, surviving restarts.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<String>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)?;
        let file: TokenFile = serde_json::from_str(&contents)?;
        Ok(Some(file.token))
    }

    fn write(&self, token: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&TokenFile {
            token: token.to_string(),
        })?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    fn remove(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, String> {
        self.read().map_err(|err| err.to_string())
    }

    fn save(&self, token: &str) -> Result<(), String> {
        self.write(token).map_err(|err| err.to_string())
    }

    fn clear(&self) -> Result<(), String> {
        self.remove().map_err(|err| err.to_string())
    }
}

// Process-local token slot for hosts without a writable disk.
#[derive(Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, String> {
        self.slot
            .lock()
            .map(|slot| slot.clone())
            .map_err(|_| StoreError::Poisoned.to_string())
    }

    fn save(&self, token: &str) -> Result<(), String> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| StoreError::Poisoned.to_string())?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), String> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| StoreError::Poisoned.to_string())?;
        *slot = None;
        Ok(())
    }
}
