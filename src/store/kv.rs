use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::errors::StoreError;

/// The device key-value store the app persists into. One slot per key,
/// opaque bytes. Implementations do not interpret the payload.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// File-backed store: one file per key under an app-owned directory.
/// Writes go through a temp file and rename so a slot is never left
/// half-written.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store at the default on-device location, creating if needed.
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self::open_at(Self::default_dir()?))
    }

    pub fn open_at(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn default_dir() -> Result<PathBuf, StoreError> {
        let data_dir = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        Ok(data_dir.join("quicknotes"))
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.slot_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.slot_path(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and previews.
#[derive(Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}
