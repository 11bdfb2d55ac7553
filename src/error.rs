use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Upstream(String),
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Internal(err) => {
                tracing::error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, message).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl From<TranslateError> for AppError {
    fn from(err: TranslateError) -> Self {
        AppError::Upstream(err.user_message())
    }
}

/// Failure of a single translation call against the remote model.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The request never produced a response (connect, TLS, timeout, body read).
    #[error("{0}")]
    Transport(String),

    /// The API answered with a non-success status.
    #[error("[{status}] {message}")]
    Api { status: u16, message: String },

    /// The API answered 2xx but the body held no usable text.
    #[error("{0}")]
    MalformedResponse(String),
}

impl TranslateError {
    /// Message shown to the user in place of a translation.
    pub fn user_message(&self) -> String {
        format!("Error: Translation failed. {}", self)
    }
}
