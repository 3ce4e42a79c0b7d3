//! Note storage.
//!
//! [`NoteStore`] owns the ordered note collection and mirrors it, in full,
//! into one slot of a [`KeyValueStore`] after every mutation. The slot holds
//! a JSON array of `{"id": <int>, "text": <string>}` records.

mod error;
mod note;
mod slot;

pub use error::StoreError;
pub use note::{IdGenerator, Note, NoteId, now_millis};
pub use slot::{FileStore, KeyValueStore, MemoryStore};

/// Slot holding the serialized note list.
pub const NOTES_KEY: &str = "notesApp";

/// Slot that receives an unreadable note list before it is reset.
pub const BACKUP_KEY: &str = "notesApp.bak";

pub struct NoteStore {
    slot: Box<dyn KeyValueStore>,
    notes: Vec<Note>,
    ids: IdGenerator,
    clock: fn() -> u64,
}

impl NoteStore {
    /// Create an empty store over `slot`. Call [`Self::load`] to read
    /// previously saved notes.
    pub fn new(slot: impl KeyValueStore + 'static) -> Self {
        Self {
            slot: Box::new(slot),
            notes: Vec::new(),
            ids: IdGenerator::new(),
            clock: now_millis,
        }
    }

    /// Replace the clock used for id generation.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the in-memory collection with the persisted one.
    ///
    /// A missing slot loads as an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`], [`StoreError::NotText`] or
    /// [`StoreError::Decode`]; the in-memory
    /// collection is left as it was.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let notes = match self.slot.get(NOTES_KEY)? {
            Some(raw) => decode(&raw)?,
            None => Vec::new(),
        };
        tracing::debug!(count = notes.len(), "loaded notes");
        self.ids = IdGenerator::seeded(notes.iter().map(|n| &n.id));
        self.notes = notes;
        Ok(())
    }

    /// Like [`Self::load`], but a corrupt slot is copied unchanged to
    /// [`BACKUP_KEY`] and the store starts empty.
    ///
    /// Returns `true` when a reset happened.
    ///
    /// # Errors
    ///
    /// Read failures, and write failures while backing up, still propagate.
    pub fn load_or_reset(&mut self) -> Result<bool, StoreError> {
        match self.load() {
            Ok(()) => Ok(false),
            Err(err) if err.is_corrupt() => {
                tracing::warn!(error = %err, "stored notes are corrupt, starting empty");
                self.slot.copy_raw(NOTES_KEY, BACKUP_KEY)?;
                self.notes.clear();
                self.ids = IdGenerator::new();
                self.save()?;
                Ok(true)
            }
            Err(err) => Err(err),
        }
    }

    /// Write the whole collection to the slot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Encode`] or [`StoreError::Write`].
    pub fn save(&mut self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.notes).map_err(StoreError::Encode)?;
        self.slot.set(NOTES_KEY, &raw)
    }

    /// Append a note with `text` trimmed and persist.
    ///
    /// # Errors
    ///
    /// [`StoreError::EmptyNote`] when the trimmed text is empty (nothing
    /// changes). A persistence error leaves the new note in memory.
    pub fn add(&mut self, text: &str) -> Result<Note, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyNote);
        }
        let note = Note {
            id: self.ids.next((self.clock)()),
            text: text.to_string(),
        };
        tracing::debug!(id = note.id, "add note");
        self.notes.push(note.clone());
        self.save()?;
        Ok(note)
    }

    /// Remove the note with `id` and persist. Returns whether a note was
    /// removed; an unknown id changes nothing but is still saved.
    ///
    /// # Errors
    ///
    /// Persistence errors from [`Self::save`].
    pub fn delete(&mut self, id: NoteId) -> Result<bool, StoreError> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = self.notes.len() != before;
        tracing::debug!(id, removed, "delete note");
        self.save()?;
        Ok(removed)
    }

    /// Remove every note if `confirm` answers yes.
    ///
    /// `confirm` is the blocking prompt; it runs exactly once. Returns
    /// `false` when declined.
    ///
    /// # Errors
    ///
    /// Persistence errors from [`Self::save`].
    pub fn clear_all(&mut self, confirm: impl FnOnce() -> bool) -> Result<bool, StoreError> {
        if !confirm() {
            tracing::debug!("clear all declined");
            return Ok(false);
        }
        tracing::debug!(count = self.notes.len(), "clear all notes");
        self.notes.clear();
        self.save()?;
        Ok(true)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Where the note list is persisted.
    pub fn location(&self) -> String {
        self.slot.location(NOTES_KEY)
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl std::fmt::Debug for NoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteStore")
            .field("location", &self.location())
            .field("notes", &self.notes)
            .finish_non_exhaustive()
    }
}

fn decode(raw: &str) -> Result<Vec<Note>, StoreError> {
    serde_json::from_str(raw).map_err(|source| StoreError::Decode {
        key: NOTES_KEY.to_string(),
        source,
    })
}
