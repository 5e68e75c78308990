use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::{
    extract::{Json, Path},
    state::AppState,
    Error, Result,
};

use super::{NewNote, Note, NotePayload, NoteStore};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/notes", get(find_notes).post(create_note))
        .route(
            "/api/notes/{note_id}",
            get(get_note).put(update_note).delete(delete_note),
        )
        .with_state(state)
}

/// A 200 always carries the note; absence has no body to send.
fn found(note: Option<Note>) -> Response {
    match note {
        Some(note) => Json(note).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn find_notes(State(store): State<NoteStore>) -> Result<Json<Vec<Note>>> {
    store.list_all().await.map(Json)
}

async fn get_note(State(store): State<NoteStore>, Path(note_id): Path<String>) -> Result<Response> {
    store.find_by_id(&note_id).await.map(found)
}

async fn create_note(State(store): State<NoteStore>, Json(payload): Json<NotePayload>) -> Result<Json<Note>> {
    tracing::debug!(?payload, "create note");
    let note = NewNote::try_from(payload)?;

    store.insert(note).await.map(Json)
}

async fn update_note(
    State(store): State<NoteStore>,
    Path(note_id): Path<String>,
    Json(payload): Json<NotePayload>,
) -> Result<Response> {
    tracing::debug!(%note_id, ?payload, "update note");
    let note = NewNote::try_from(payload)?;

    store.update(&note_id, note).await.map(found)
}

/// An id that cannot even be decoded matches nothing, so it still answers 204.
async fn delete_note(
    State(store): State<NoteStore>,
    note_id: std::result::Result<Path<String>, Error>,
) -> Result<StatusCode> {
    if let Ok(Path(note_id)) = note_id {
        store.delete_by_id(&note_id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}
