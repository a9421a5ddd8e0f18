use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use opentld_domain::ResolveError;

/// Error bodies are plain text and never carry wire bytes.
pub struct ApiError(pub ResolveError);

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ResolveError::InvalidQuery(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            ResolveError::NameNotResolvable => (StatusCode::NOT_FOUND, "NXDOMAIN".to_string()),

            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        (status, message).into_response()
    }
}
