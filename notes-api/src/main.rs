mod app;
mod config;
mod db;
mod errors;
mod extract;
mod logging;
mod notes;
mod state;

use app::AppParams;
use config::{Config, StorageKind};
pub use errors::{Error, Result};
use notes::NoteStore;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> errors::Result<()> {
    let config = Config::from_env()?;

    logging::setup_tracing(config.log_json);

    let store = match config.storage {
        StorageKind::Memory => NoteStore::memory(),
        StorageKind::Sqlite => NoteStore::sqlite(db::init_db(&config.database_url).await?),
    };

    if config.seed_notes {
        let seeded = store.seed(notes::fixtures()).await?;
        tracing::debug!(seeded, "seeded notes");
    }

    let addr = config.addr();
    tracing::info!(storage = ?config.storage, "starting notes api");

    let app = app::create(AppParams { store, config }).await?;
    let app = logging::add_tracing_layer(app);

    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
pub mod tests {
    use crate::{
        app::{create, AppParams},
        config::Config,
        errors::Result,
        notes::NoteStore,
    };
    use axum_test::TestServer;

    pub async fn test_server(store: NoteStore) -> Result<TestServer> {
        test_server_with(store, Config::default()).await
    }

    pub async fn test_server_with(store: NoteStore, config: Config) -> Result<TestServer> {
        let app = create(AppParams { store, config }).await?;

        Ok(TestServer::new(app).unwrap())
    }
}
