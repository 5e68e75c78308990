use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Store-assigned note id. The memory store hands out sequential integers,
/// the sqlite store opaque UUIDv7 keys; both serialize as plain JSON scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteId {
    Seq(u64),
    Key(Uuid),
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteId::Seq(id) => write!(f, "{id}"),
            NoteId::Key(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub content: String,
    pub important: bool,
}

/// Raw request body for create and update. Fields stay untyped until
/// [`NewNote::try_from`] checks them.
#[derive(Debug, Default, Deserialize)]
pub struct NotePayload {
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub important: Option<Value>,
}

/// A validated note without an id, ready for insert or update.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    pub content: String,
    pub important: bool,
}

impl NewNote {
    pub fn new(content: impl Into<String>, important: bool) -> Self {
        Self {
            content: content.into(),
            important,
        }
    }

    pub fn with_id(self, id: NoteId) -> Note {
        Note {
            id,
            content: self.content,
            important: self.important,
        }
    }
}

pub fn fixtures() -> Vec<NewNote> {
    vec![
        NewNote::new("HTML is easy", true),
        NewNote::new("Browser can execute only JavaScript", false),
        NewNote::new("GET and POST are the most important methods of HTTP protocol", true),
    ]
}
