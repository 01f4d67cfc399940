use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalogscope_api::{ApiError, ErrorBody, ValidationError};
use tracing::{debug, error};

/// Maps an [`ApiError`] onto an HTTP status and an `{ "error": ... }` body.
#[derive(Debug)]
pub struct ApiErrorResponse(pub ApiError);

impl From<ApiError> for ApiErrorResponse {
    fn from(err: ApiError) -> Self {
        ApiErrorResponse(err)
    }
}

impl From<QueryRejection> for ApiErrorResponse {
    fn from(rejection: QueryRejection) -> Self {
        ApiErrorResponse(ValidationError::MalformedRequest(rejection.body_text()).into())
    }
}

impl From<PathRejection> for ApiErrorResponse {
    fn from(rejection: PathRejection) -> Self {
        ApiErrorResponse(ValidationError::MalformedRequest(rejection.body_text()).into())
    }
}

impl ApiErrorResponse {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) | ApiError::MalformedEntry(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.0.is_upstream() {
            error!("Request failed upstream: {}", self.0);
        } else {
            debug!("Request rejected ({}): {}", status, self.0);
        }
        (status, Json(ErrorBody::new(self.0.to_string()))).into_response()
    }
}
