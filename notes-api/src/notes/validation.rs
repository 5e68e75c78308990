use serde_json::Value;

use crate::{Error, Result};

use super::{NewNote, NotePayload};

pub const CONTENT_MISSING: &str = "content missing";
pub const CONTENT_NOT_STRING: &str = "content must be a string";

impl TryFrom<NotePayload> for NewNote {
    type Error = Error;

    fn try_from(NotePayload { content, important }: NotePayload) -> Result<Self> {
        let content = match content {
            None | Some(Value::Null) => return Err(Error::Validation(CONTENT_MISSING.into())),
            Some(Value::String(content)) if content.is_empty() => {
                return Err(Error::Validation(CONTENT_MISSING.into()))
            }
            Some(Value::String(content)) => content,
            Some(_) => return Err(Error::Validation(CONTENT_NOT_STRING.into())),
        };

        Ok(NewNote {
            content,
            important: important.as_ref().is_some_and(is_truthy),
        })
    }
}

/// Only `true` and non-empty arrays/objects count as set; strings and
/// numbers are never coerced.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        Value::Null | Value::Number(_) | Value::String(_) => false,
    }
}
