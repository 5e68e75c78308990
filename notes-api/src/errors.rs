use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Request,
    },
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::db;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The id cannot address the store, e.g. `abc` for an integer keyed store.
    #[error("malformatted id")]
    MalformedId(String),
    /// The id segment could not be decoded at all, e.g. invalid UTF-8.
    #[error("malformatted id")]
    PathValidation(#[from] PathRejection),

    // validation
    #[error("{0}")]
    Validation(String),
    #[error("validation")]
    JsonValidation(#[from] JsonRejection),

    #[error(transparent)]
    DB(#[from] db::Error),

    // startup
    #[error(transparent)]
    Config(#[from] envy::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

impl Error {
    /// Structured body for the errors a client can act on. `None` means the
    /// failure is left to the default 500 path.
    fn response(&self) -> Option<ErrorResponse> {
        match self {
            Error::MalformedId(_) | Error::PathValidation(_) => Some(ErrorResponse::new("malformatted id")),
            Error::Validation(message) => Some(ErrorResponse::new(message.as_str())),
            Error::JsonValidation(rejection) => Some(ErrorResponse::new(rejection.body_text())),
            _ => None,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let error = Arc::new(self);

        let mut res = match error.response() {
            Some(body) => (StatusCode::BAD_REQUEST, axum::Json(body)).into_response(),
            None => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response(),
        };
        res.extensions_mut().insert(error);
        res
    }
}

pub async fn on_error(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    let error = response.extensions().get::<Arc<Error>>().map(Arc::as_ref);
    if let Some(error) = error {
        if response.status().is_server_error() {
            tracing::error!("{:?}", error);
        } else {
            tracing::warn!("{}", error);
        }
    }

    response
}
