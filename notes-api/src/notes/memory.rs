use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{Error, Result};

use super::{NewNote, Note, NoteId};

/// Process-local notes kept in insertion order with sequential ids.
#[derive(Clone, Default)]
pub struct MemoryStore {
    notes: Arc<RwLock<Vec<Note>>>,
}

/// Accepts what `u64::from_str` accepts, so `+1` addresses note 1.
fn parse_id(id: &str) -> Result<NoteId> {
    id.parse::<u64>()
        .map(NoteId::Seq)
        .map_err(|_| Error::MalformedId(id.into()))
}

impl MemoryStore {
    pub async fn list_all(&self) -> Vec<Note> {
        self.notes.read().await.clone()
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Note>> {
        let id = parse_id(id)?;
        Ok(self.notes.read().await.iter().find(|note| note.id == id).cloned())
    }

    pub async fn insert(&self, note: NewNote) -> Note {
        let mut notes = self.notes.write().await;

        let max_id = notes
            .iter()
            .filter_map(|note| match note.id {
                NoteId::Seq(id) => Some(id),
                NoteId::Key(_) => None,
            })
            .max()
            .unwrap_or(0);

        let note = note.with_id(NoteId::Seq(max_id + 1));
        notes.push(note.clone());
        note
    }

    pub async fn update(&self, id: &str, NewNote { content, important }: NewNote) -> Result<Option<Note>> {
        let id = parse_id(id)?;
        let mut notes = self.notes.write().await;

        Ok(notes.iter_mut().find(|note| note.id == id).map(|note| {
            note.content = content;
            note.important = important;
            note.clone()
        }))
    }

    /// Unknown and malformed ids are both a no-op.
    pub async fn delete_by_id(&self, id: &str) -> Result<()> {
        let Ok(id) = parse_id(id) else {
            return Ok(());
        };
        self.notes.write().await.retain(|note| note.id != id);
        Ok(())
    }
}
