use std::sync::Arc;

use axum::{
    extract::State,
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use rand::Rng;
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::{
    config::Config,
    errors::{self, on_error, ErrorResponse},
    notes::{self, NoteStore},
    state::AppState,
};

pub struct AppParams {
    pub store: NoteStore,
    pub config: Config,
}

pub async fn create(AppParams { store, config }: AppParams) -> errors::Result<Router> {
    let static_dir = config.static_dir.clone();
    let state = AppState {
        store,
        config: Arc::new(config),
    };

    let app = Router::new()
        .route("/__version__", get(version))
        .route("/__heartbeat__", get(heartbeat))
        .route("/__lbheartbeat__", get(lbheartbeat))
        .with_state(state.clone())
        .merge(notes::router(state));

    let app = match static_dir {
        Some(dir) => {
            tracing::info!(%dir, "serving static files");
            let serve_dir = ServeDir::new(dir)
                .call_fallback_on_method_not_allowed(true)
                .not_found_service(unknown_endpoint.into_service());
            app.fallback_service(serve_dir)
        }
        None => app.route("/", get(hello)).fallback(unknown_endpoint),
    };

    let app = app.method_not_allowed_fallback(unknown_endpoint).layer(
        ServiceBuilder::new()
            .layer(CorsLayer::permissive())
            .layer(middleware::from_fn(on_error)),
    );

    Ok(app)
}

pub async fn unknown_endpoint() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("unknown endpoint")))
}

async fn hello() -> Html<&'static str> {
    Html("<h1>Hello World!</h1>")
}

async fn version(State(config): State<Arc<Config>>) -> impl IntoResponse {
    Json(json!({
        "source" : config.source,
        "version": config.version,
        "commit" : config.git_commit,
        "build"  : config.pipeline_id
    }))
}

async fn heartbeat() -> impl IntoResponse {
    let mut rng = rand::thread_rng();
    let random: u32 = rng.gen_range(0..=10000);

    Json(json!({
        "status" : "ok",
        "random": random,
    }))
}

async fn lbheartbeat() -> impl IntoResponse {
    ""
}

#[cfg(test)]
mod tests {
    use axum::http::{header, HeaderValue, StatusCode};
    use serde_json::{json, Value};

    use crate::{
        config::Config,
        errors::{ErrorResponse, Result},
        notes::NoteStore,
        tests::{test_server, test_server_with},
    };

    #[tokio::test]
    async fn unknown_path() -> Result<()> {
        let server = test_server(NoteStore::memory()).await?;
        let response = server.get("/api/users").await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(response.json::<ErrorResponse>(), ErrorResponse::new("unknown endpoint"));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_method() -> Result<()> {
        let server = test_server(NoteStore::memory()).await?;
        let response = server.patch("/api/notes/1").json(&json!({ "content": "x" })).await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(response.json::<ErrorResponse>(), ErrorResponse::new("unknown endpoint"));
        Ok(())
    }

    #[tokio::test]
    async fn hello_world() -> Result<()> {
        let server = test_server(NoteStore::memory()).await?;
        let response = server.get("/").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.text(), "<h1>Hello World!</h1>");
        Ok(())
    }

    #[tokio::test]
    async fn service_endpoints() -> Result<()> {
        let server = test_server(NoteStore::memory()).await?;

        let version = server.get("/__version__").await.json::<Value>();
        assert_eq!(version["version"], "local");

        let heartbeat = server.get("/__heartbeat__").await.json::<Value>();
        assert_eq!(heartbeat["status"], "ok");
        assert!(heartbeat["random"].as_u64().is_some_and(|r| r <= 10000));

        assert_eq!(server.get("/__lbheartbeat__").await.status_code(), StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn cors_allows_any_origin() -> Result<()> {
        let server = test_server(NoteStore::memory()).await?;
        let response = server
            .get("/api/notes")
            .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:5173"))
            .await;

        assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
        Ok(())
    }

    #[tokio::test]
    async fn static_dir_with_api_fallthrough() -> Result<()> {
        let config = Config {
            static_dir: Some(concat!(env!("CARGO_MANIFEST_DIR"), "/static").into()),
            ..Config::default()
        };
        let server = test_server_with(NoteStore::memory(), config).await?;

        let response = server.get("/").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert!(response.text().contains("<div id=\"root\">"));

        assert_eq!(server.get("/api/notes").await.status_code(), StatusCode::OK);

        let response = server.post("/missing").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(response.json::<ErrorResponse>(), ErrorResponse::new("unknown endpoint"));
        Ok(())
    }
}
