use std::sync::Arc;

use axum::extract::FromRef;

use crate::{config::Config, notes::NoteStore};

#[derive(FromRef, Clone)]
pub struct AppState {
    pub store: NoteStore,
    pub config: Arc<Config>,
}
