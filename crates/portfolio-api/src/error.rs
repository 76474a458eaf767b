use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use portfolio_types::TimelineError;

/// HTTP face of [`TimelineError`].
///
/// Input errors become a 400 with the plain-text reason. Storage failures are
/// logged and become an empty 500.
#[derive(Debug)]
pub struct ApiError(pub TimelineError);

impl From<TimelineError> for ApiError {
    fn from(err: TimelineError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.0.is_client_error() {
            return (StatusCode::BAD_REQUEST, self.0.to_string()).into_response();
        }

        error!("{}", self.0);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
