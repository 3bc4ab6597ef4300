use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors a handler can return.
///
/// Internal failures are logged in full but reach the client only as a
/// generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Place {0} not found")]
    PlaceNotFound(i64),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::PlaceNotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::PlaceNotFound(_) => {
                tracing::warn!("{}", self);
                "Place not found"
            }
            Self::Internal(e) => {
                tracing::error!("Internal error: {:#}", e);
                "Internal server error"
            }
        };
        (status, body).into_response()
    }
}
