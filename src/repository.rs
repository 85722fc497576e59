//! The authoritative in-memory note collection.
//!
//! All note mutations go through [`NoteRepository`]; nothing else writes the
//! storage slot. Every mutation runs validate -> mutate -> persist -> notify
//! to completion before the next one is accepted (the app drives this from a
//! single event loop, so no locking is involved).
//!
//! Persistence is write-through and optimistic: the in-memory collection is
//! updated first and a failed save does NOT roll it back. The list the user
//! sees stays coherent; disk catches up on the next successful save, or the
//! app re-reads the slot via [`NoteRepository::reload`].

use log::{debug, warn};
use thiserror::Error;
use uuid::Uuid;

use crate::filter::{filter_notes, CategoryFilter};
use crate::models::{Note, NoteDraft};
use crate::store::{NoteStore, StoreError};

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Both title and content were blank after trimming.
    #[error("note needs a title or some content")]
    EmptyNote,

    /// The targeted note is not in the collection (stale reference).
    #[error("no note with id {0}")]
    NotFound(Uuid),

    /// The collection could not be written back. The in-memory change has
    /// already been applied.
    #[error(transparent)]
    Persistence(#[from] StoreError),
}

type Observer = Box<dyn Fn(&[Note])>;

/// Owns the ordered note collection, newest first.
pub struct NoteRepository {
    store: NoteStore,
    notes: Vec<Note>,
    observers: Vec<Observer>,
}

impl NoteRepository {
    /// Open against on-device storage and load whatever is there.
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self::with_store(NoteStore::open()?))
    }

    /// Load the collection once from the given store.
    pub fn with_store(store: NoteStore) -> Self {
        let notes = store.load_all();
        debug!("loaded {} notes", notes.len());
        Self {
            store,
            notes,
            observers: Vec::new(),
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Derived display list for the current search box and category chip.
    pub fn filtered(&self, query: &str, category: CategoryFilter) -> Vec<Note> {
        filter_notes(&self.notes, query, category)
    }

    /// Register a callback invoked with the new collection after every
    /// mutation, including ones whose save failed (the in-memory state is
    /// what the UI renders either way).
    pub fn subscribe(&mut self, observer: impl Fn(&[Note]) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Validate a draft and prepend it as a new note.
    pub fn create(&mut self, draft: NoteDraft) -> Result<Note, RepositoryError> {
        if draft.is_blank() {
            return Err(RepositoryError::EmptyNote);
        }

        let note = Note::new(draft);
        self.notes.insert(0, note.clone());
        let saved = self.persist();
        self.notify();
        saved?;
        Ok(note)
    }

    /// Replace an existing note's fields in place. The note keeps its
    /// position in the collection; only the timestamp moves forward.
    pub fn update(&mut self, id: Uuid, draft: NoteDraft) -> Result<Note, RepositoryError> {
        if draft.is_blank() {
            return Err(RepositoryError::EmptyNote);
        }

        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(RepositoryError::NotFound(id))?;
        note.revise(draft);
        let note = note.clone();

        let saved = self.persist();
        self.notify();
        saved?;
        Ok(note)
    }

    /// Remove a note by id. Deleting an id that is not present is a
    /// successful no-op; the UI may race itself on double taps.
    pub fn delete(&mut self, id: Uuid) -> Result<(), RepositoryError> {
        self.notes.retain(|n| n.id != id);
        let saved = self.persist();
        self.notify();
        saved?;
        Ok(())
    }

    /// Drop every note and the storage slot with it. Unconditional -
    /// confirming with the user happens before this is called.
    pub fn clear_all(&mut self) -> Result<(), RepositoryError> {
        self.notes.clear();
        let cleared = self.store.clear();
        if let Err(ref e) = cleared {
            warn!("failed to clear note slot: {e}");
        }
        self.notify();
        cleared?;
        Ok(())
    }

    /// Re-read the slot, discarding the in-memory collection. This is the
    /// only path that re-syncs memory with disk after a failed save.
    pub fn reload(&mut self) {
        self.notes = self.store.load_all();
        self.notify();
    }

    fn persist(&self) -> Result<(), StoreError> {
        let result = self.store.save_all(&self.notes);
        if let Err(ref e) = result {
            warn!("failed to save notes, keeping in-memory state: {e}");
        }
        result
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer(&self.notes);
        }
    }
}
