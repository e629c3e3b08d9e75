//! Session storage
//!
//! A small key/value store with browser local-storage semantics. The admin
//! session lives under two keys, `admin_token` and `admin_info`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::utils::errors::{PortalError, Result};

pub const ADMIN_TOKEN_KEY: &str = "admin_token";
pub const ADMIN_INFO_KEY: &str = "admin_info";

/// Key/value persistence for client state.
///
/// Synchronous like browser local storage. The session guard clears it from
/// inside session state transitions, so subscribers never see a logged-out
/// state while the old token is still stored. Implementations must stay
/// cheap enough to call from async code.
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Process-local storage, used by tests and short-lived embeddings
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn items(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items().remove(key);
        Ok(())
    }
}

/// Storage persisted as a JSON object in a single file.
///
/// Uses blocking `std::fs`. The file holds two small keys and is only written
/// when the session starts or ends.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<HashMap<String, String>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Session file is corrupt, starting empty");
                Ok(HashMap::new())
            }
        }
    }

    fn write_all(&self, items: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_string_pretty(items)?;
        // Unique per write so concurrent CLI runs never share a temp file
        let tmp = self.path.with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        std::fs::write(&tmp, serialized)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), keys = items.len(), "Session file written");
        Ok(())
    }

    fn update<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut HashMap<String, String>),
    {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| PortalError::Storage("session file lock poisoned".to_string()))?;
        let mut items = self.read_all()?;
        change(&mut items);
        self.write_all(&items)
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.update(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.update(|items| {
            items.remove(key);
        })
    }
}
