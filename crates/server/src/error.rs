use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::GamethreadError;

/// A fault that escaped the generation handler with reporting disabled.
#[derive(Debug)]
pub struct AppError(pub GamethreadError);

impl From<GamethreadError> for AppError {
    fn from(err: GamethreadError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Unhandled error while generating gamethread: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
