//! Note store business logic

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use uuid::Uuid;

use super::error::NoteServiceError;

/// A stored note
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Note unique ID
    pub id: Uuid,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Note text
    pub note: String,
}

/// In-memory note store
///
/// Handlers share one instance through the router state. All access
/// goes through the internal read-write lock.
pub struct NoteService {
    notes: RwLock<HashMap<Uuid, Note>>,
    max_note_bytes: usize,
}

impl NoteService {
    pub fn new(max_note_bytes: usize) -> Self {
        Self {
            notes: RwLock::new(HashMap::new()),
            max_note_bytes,
        }
    }

    /// Create a note from the given text
    pub fn create(&self, text: impl Into<String>) -> Result<Note, NoteServiceError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(NoteServiceError::InvalidNote(
                "note text is empty".to_string(),
            ));
        }
        if text.len() > self.max_note_bytes {
            return Err(NoteServiceError::InvalidNote(format!(
                "note text exceeds {} bytes",
                self.max_note_bytes
            )));
        }

        let note = Note {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            note: text,
        };
        self.notes.write().insert(note.id, note.clone());
        Ok(note)
    }

    /// Get all notes, newest first
    pub fn list(&self) -> Vec<Note> {
        let mut notes: Vec<Note> = self.notes.read().values().cloned().collect();
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notes
    }

    /// Get a single note by ID
    pub fn get(&self, id: Uuid) -> Result<Note, NoteServiceError> {
        self.notes
            .read()
            .get(&id)
            .cloned()
            .ok_or(NoteServiceError::NotFound(id))
    }

    /// Delete a note by ID
    pub fn delete(&self, id: Uuid) -> Result<(), NoteServiceError> {
        self.notes
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or(NoteServiceError::NotFound(id))
    }
}
