use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use realmlink_core::authorize::AuthorizeError;
use thiserror::Error;

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Authorize(#[from] AuthorizeError),

    #[error("failed to render template: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Authorize(AuthorizeError::MissingField(_)) => {
                tracing::warn!(error = %self, "Rejected authorization request");
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Authorize(AuthorizeError::InvalidLocation(_)) => {
                tracing::warn!(error = %self, "Rejected authorization request");
                (
                    StatusCode::BAD_REQUEST,
                    "Realm name and client ID must not contain control characters".to_string(),
                )
            }
            AppError::Template(_) => {
                tracing::error!(error = %self, "Template error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        (status, message).into_response()
    }
}
