use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing credentials")]
    MissingCredentials,

    #[error("user already exists")]
    UserAlreadyExists,

    #[error("wrong credentials")]
    WrongCredentials,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingCredentials => {
                (StatusCode::BAD_REQUEST, "Email and password are required")
            }
            AuthError::UserAlreadyExists => (
                StatusCode::CONFLICT,
                "An account with this email already exists",
            ),
            AuthError::WrongCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid credentials. Please go back and try again.",
            ),
            AuthError::Internal(ref e) => {
                tracing::error!(error = %e, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred",
                )
            }
        };

        (status, message).into_response()
    }
}
