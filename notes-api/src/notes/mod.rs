mod memory;
mod model;
mod routes;
mod sqlite;
mod store;
mod validation;

pub use memory::MemoryStore;
pub use model::*;
pub use sqlite::SqliteStore;
pub use store::NoteStore;

use axum::Router;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new().merge(routes::router(state))
}
