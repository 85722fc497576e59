//! Persistence gateway for the note collection.
//!
//! The whole collection lives in a single key-value slot as one JSON array,
//! mirroring how the app stores it on-device. There is no incremental
//! persistence; every save rewrites the slot.

use std::path::PathBuf;

use log::warn;

use crate::models::Note;

mod errors;
mod kv;

pub use errors::StoreError;
pub use kv::{FileStore, KeyValueStore, MemoryStore};

/// Fixed slot the collection is stored under, kept stable across versions
/// so upgrades keep reading old data.
pub const STORAGE_KEY: &str = "quick_notes_v1";

/// Reads and writes the full note collection through an injected key-value
/// backend.
pub struct NoteStore {
    backend: Box<dyn KeyValueStore>,
}

impl NoteStore {
    /// Open against the on-device file backend at its default location.
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self::with_backend(Box::new(FileStore::open()?)))
    }

    pub fn open_at(dir: PathBuf) -> Self {
        Self::with_backend(Box::new(FileStore::open_at(dir)))
    }

    /// In-memory store for testing
    pub fn open_memory() -> Self {
        Self::with_backend(Box::new(MemoryStore::new()))
    }

    pub fn with_backend(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Load every stored note, newest first. An absent slot or an unreadable
    /// payload both come back as an empty collection: a corrupt slot must
    /// never brick the app, and the next save overwrites it anyway.
    pub fn load_all(&self) -> Vec<Note> {
        let bytes = match self.backend.get(STORAGE_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("failed to read note slot, starting empty: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(notes) => notes,
            Err(e) => {
                warn!("note slot is corrupt, starting empty: {e}");
                Vec::new()
            }
        }
    }

    /// Serialize and write the whole collection. Failures are reported to
    /// the caller; the repository decides what to tell the user.
    pub fn save_all(&self, notes: &[Note]) -> Result<(), StoreError> {
        let payload = serde_json::to_vec(notes)?;
        self.backend.set(STORAGE_KEY, &payload)
    }

    /// Remove the slot entirely. Equivalent to saving an empty collection.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove(STORAGE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, NoteDraft};

    fn sample_notes() -> Vec<Note> {
        vec![
            Note::new(NoteDraft::new("Standup", "sync with team").with_category(Category::Work)),
            Note::new(NoteDraft::new("Groceries", "milk, eggs")),
        ]
    }

    #[test]
    fn test_load_absent_slot_is_empty() {
        let store = NoteStore::open_memory();
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = NoteStore::open_memory();
        let notes = sample_notes();
        store.save_all(&notes).unwrap();
        assert_eq!(store.load_all(), notes);
    }

    #[test]
    fn test_corrupt_slot_loads_empty() {
        let backend = MemoryStore::new();
        backend.set(STORAGE_KEY, b"{not json").unwrap();
        let store = NoteStore::with_backend(Box::new(backend));
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_clear_removes_slot() {
        let store = NoteStore::open_memory();
        store.save_all(&sample_notes()).unwrap();
        store.clear().unwrap();
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let notes = sample_notes();
        {
            let store = NoteStore::open_at(dir.path().to_path_buf());
            store.save_all(&notes).unwrap();
        }
        // Fresh handle, same directory: what a process restart sees.
        let store = NoteStore::open_at(dir.path().to_path_buf());
        assert_eq!(store.load_all(), notes);
    }

    #[test]
    fn test_legacy_payload_without_category() {
        let payload = r#"[{
            "id": "9f8b0c1a-5b2e-4e1c-8c3d-333333333333",
            "title": "Old",
            "content": "pre-category note",
            "attachments": [],
            "timestamp": "2023-11-02T08:00:00Z"
        }]"#;
        let backend = MemoryStore::new();
        backend.set(STORAGE_KEY, payload.as_bytes()).unwrap();
        let store = NoteStore::with_backend(Box::new(backend));

        let notes = store.load_all();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].category, Category::Personal);
    }
}
