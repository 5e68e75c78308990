use rusqlite::{params, OptionalExtension, Row};
use uuid::Uuid;

use crate::{
    db::{self, DB},
    Error, Result,
};

use super::{NewNote, Note, NoteId};

/// Notes kept in a sqlite `notes` table, keyed by store-generated UUIDv7 ids.
#[derive(Clone)]
pub struct SqliteStore {
    db: DB,
}

impl<'a> TryFrom<&Row<'a>> for Note {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'a>) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            id: NoteId::Key(row.get(0)?),
            content: row.get(1)?,
            important: row.get(2)?,
        })
    }
}

fn parse_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id).map_err(|_| Error::MalformedId(id.into()))
}

impl SqliteStore {
    pub fn new(db: DB) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> Result<Vec<Note>> {
        self.db
            .call(|conn| {
                let notes = conn
                    .prepare("SELECT id, content, important FROM notes ORDER BY rowid")?
                    .query_map([], |row| Note::try_from(row))?
                    .collect::<std::result::Result<Vec<_>, _>>()?;
                Ok(notes)
            })
            .await
            .map_err(db::Error::from)
            .map_err(Error::from)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Note>> {
        let note_id = parse_id(id)?;

        self.db
            .call(move |conn| {
                let note = conn
                    .query_row(
                        "SELECT id, content, important FROM notes WHERE id = ?",
                        params![note_id],
                        |row| Note::try_from(row),
                    )
                    .optional()?;
                Ok(note)
            })
            .await
            .map_err(db::Error::from)
            .map_err(Error::from)
    }

    pub async fn insert(&self, NewNote { content, important }: NewNote) -> Result<Note> {
        self.db
            .call(move |conn| {
                conn.query_row(
                    r#"INSERT INTO notes (content, important) VALUES (?, ?)
                    RETURNING id, content, important"#,
                    params![content, important],
                    |row| Note::try_from(row),
                )
                .map_err(|e| e.into())
            })
            .await
            .map_err(db::Error::from)
            .map_err(Error::from)
    }

    pub async fn update(&self, id: &str, NewNote { content, important }: NewNote) -> Result<Option<Note>> {
        let note_id = parse_id(id)?;

        self.db
            .call(move |conn| {
                let note = conn
                    .query_row(
                        r#"UPDATE notes SET content = ?, important = ?
                        WHERE id = ?
                        RETURNING id, content, important"#,
                        params![content, important, note_id],
                        |row| Note::try_from(row),
                    )
                    .optional()?;
                Ok(note)
            })
            .await
            .map_err(db::Error::from)
            .map_err(Error::from)
    }

    /// Malformed ids cannot match a row, so they delete nothing.
    pub async fn delete_by_id(&self, id: &str) -> Result<()> {
        let Ok(note_id) = parse_id(id) else {
            return Ok(());
        };

        let deleted = self
            .db
            .call(move |conn| {
                conn.execute("DELETE FROM notes WHERE id = ?", params![note_id])
                    .map_err(|e| e.into())
            })
            .await
            .map_err(db::Error::from)?;

        tracing::debug!(%note_id, deleted, "delete note");
        Ok(())
    }
}
