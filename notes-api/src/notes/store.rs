use crate::{db::DB, Result};

use super::{memory::MemoryStore, sqlite::SqliteStore, NewNote, Note};

/// Persistence gateway handed to every route through the app state.
///
/// Absence is a normal outcome (`Ok(None)`); an id the backend cannot parse
/// is [`crate::Error::MalformedId`].
#[derive(Clone)]
pub enum NoteStore {
    Memory(MemoryStore),
    Sqlite(SqliteStore),
}

impl NoteStore {
    pub fn memory() -> Self {
        Self::Memory(MemoryStore::default())
    }

    pub fn sqlite(db: DB) -> Self {
        Self::Sqlite(SqliteStore::new(db))
    }

    pub async fn list_all(&self) -> Result<Vec<Note>> {
        match self {
            Self::Memory(store) => Ok(store.list_all().await),
            Self::Sqlite(store) => store.list_all().await,
        }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Note>> {
        match self {
            Self::Memory(store) => store.find_by_id(id).await,
            Self::Sqlite(store) => store.find_by_id(id).await,
        }
    }

    pub async fn insert(&self, note: NewNote) -> Result<Note> {
        match self {
            Self::Memory(store) => Ok(store.insert(note).await),
            Self::Sqlite(store) => store.insert(note).await,
        }
    }

    pub async fn update(&self, id: &str, note: NewNote) -> Result<Option<Note>> {
        match self {
            Self::Memory(store) => store.update(id, note).await,
            Self::Sqlite(store) => store.update(id, note).await,
        }
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<()> {
        match self {
            Self::Memory(store) => store.delete_by_id(id).await,
            Self::Sqlite(store) => store.delete_by_id(id).await,
        }
    }

    /// Inserts `notes` only when the store holds nothing yet.
    pub async fn seed(&self, notes: Vec<NewNote>) -> Result<usize> {
        if !self.list_all().await?.is_empty() {
            return Ok(0);
        }

        let count = notes.len();
        for note in notes {
            self.insert(note).await?;
        }
        Ok(count)
    }
}
