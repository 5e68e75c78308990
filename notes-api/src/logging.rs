use axum::{body::Body, http::Request, Router};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{self, TraceLayer},
};
use tracing_subscriber::prelude::*;

pub fn setup_tracing(json: bool) {
    let tracing = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "notes_api=debug,tower_http=debug,axum::rejection=trace".into()),
    );

    if json {
        tracing.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        tracing
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_file(true)
                    .with_line_number(true)
                    .with_target(false),
            )
            .init();
    };
}

pub fn add_tracing_layer(app: Router) -> Router {
    app.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<Body>| {
                        let request_id = request
                            .headers()
                            .get("x-request-id")
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or_default();
                        tracing::span!(
                            tracing::Level::DEBUG,
                            "request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id,
                        )
                    })
                    .on_request(trace::DefaultOnRequest::new())
                    .on_response(trace::DefaultOnResponse::new().include_headers(false))
                    .on_failure(trace::DefaultOnFailure::new()),
            ),
    )
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderName, StatusCode};
    use axum_test::TestServer;

    use crate::{
        app::{create, AppParams},
        config::Config,
        errors::Result,
        notes::NoteStore,
    };

    use super::add_tracing_layer;

    #[tokio::test]
    async fn assigns_request_ids() -> Result<()> {
        let app = create(AppParams {
            store: NoteStore::memory(),
            config: Config::default(),
        })
        .await?;
        let server = TestServer::new(add_tracing_layer(app)).unwrap();

        let response = server.get("/api/notes").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let request_id = response.header(HeaderName::from_static("x-request-id"));
        assert!(uuid::Uuid::parse_str(request_id.to_str().unwrap()).is_ok());
        Ok(())
    }
}
