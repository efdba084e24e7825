//! Local persistence for the single user preference we keep: the language.
//!
//! - Web: `localStorage["language"]`
//! - Native: `preferences.json` in the platform data directory
//! - Tests: [`MemoryStore`]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

/// Storage key for the persisted language code (`"en"` / `"ko"`).
pub const LANGUAGE_KEY: &str = "language";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file is malformed: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("browser storage rejected the write: {0}")]
    Rejected(String),
}

pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Volatile store; clones share the same map (a "fresh load" reads what an
/// earlier handle wrote).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser `localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StorageError::Rejected(format!("{err:?}")))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Rejected(format!("{err:?}")))
    }
}

/// On-disk shape: a flat JSON object, keys sorted.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
struct PreferenceFile(std::collections::BTreeMap<String, String>);

/// JSON file of string preferences.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn at(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/preferences.json` for this app, if the OS exposes one.
    pub fn in_data_dir() -> Option<Self> {
        directories::ProjectDirs::from("care", "Pitcrew", "pitcrew")
            .map(|dirs| Self::at(dirs.data_dir().join("preferences.json")))
    }

    fn read_all(&self) -> Result<PreferenceFile, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(PreferenceFile::default()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.0.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut all = self.read_all().unwrap_or_else(|err| {
            tracing::warn!(%err, path = %self.path.display(), "replacing unreadable preference file");
            PreferenceFile::default()
        });
        all.0.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&all)?)?;
        Ok(())
    }
}

/// Default store for the current platform.
pub fn platform_store() -> Option<Box<dyn PreferenceStore>> {
    #[cfg(target_arch = "wasm32")]
    {
        Some(Box::new(LocalStorage))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        FileStore::in_data_dir().map(|s| Box::new(s) as Box<dyn PreferenceStore>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_shares_state_between_clones() {
        let store = MemoryStore::new();
        assert_eq!(store.load(LANGUAGE_KEY).unwrap(), None);
        store.save(LANGUAGE_KEY, "ko").unwrap();
        let reopened = store.clone();
        assert_eq!(reopened.load(LANGUAGE_KEY).unwrap().as_deref(), Some("ko"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_round_trips_and_tolerates_missing_file() {
        let dir = std::env::temp_dir().join(format!("pitcrew-prefs-{}", std::process::id()));
        let store = FileStore::at(dir.join("nested").join("preferences.json"));
        assert_eq!(store.load(LANGUAGE_KEY).unwrap(), None);
        store.save(LANGUAGE_KEY, "en").unwrap();
        store.save(LANGUAGE_KEY, "ko").unwrap();
        assert_eq!(store.load(LANGUAGE_KEY).unwrap().as_deref(), Some("ko"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_reports_malformed_json() {
        let dir = std::env::temp_dir().join(format!("pitcrew-bad-prefs-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("preferences.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = FileStore::at(&path);
        assert!(matches!(store.load(LANGUAGE_KEY), Err(StorageError::Serde(_))));

        // Saving over a malformed file starts a fresh one.
        store.save(LANGUAGE_KEY, "ko").unwrap();
        assert_eq!(store.load(LANGUAGE_KEY).unwrap().as_deref(), Some("ko"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
