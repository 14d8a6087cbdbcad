use crate::domain::models::RenderMapError;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// A successful JSON response: the status code is repeated in the body.
#[derive(Debug, Clone)]
pub(super) struct ApiSuccess<T: Serialize>(StatusCode, Json<ApiResponseBody<T>>);

impl<T: Serialize> ApiSuccess<T> {
    pub(super) fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ApiError {
    BadGateway(String),
}

impl From<RenderMapError> for ApiError {
    fn from(e: RenderMapError) -> Self {
        match e {
            RenderMapError::Feed(e) => Self::BadGateway(e.to_string()),
        }
    }
}

impl ApiError {
    pub(super) fn status(&self) -> StatusCode {
        match self {
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub(super) fn message(&self) -> &str {
        match self {
            ApiError::BadGateway(message) => message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(status = status.as_u16(), "{}", self.message());

        (
            status,
            Json(ApiResponseBody::new_error(status, self.message().to_string())),
        )
            .into_response()
    }
}

/// Generic response structure shared by all API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(super) struct ApiResponseBody<T: Serialize> {
    status_code: u16,
    data: T,
}

impl<T: Serialize> ApiResponseBody<T> {
    pub(super) fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub(super) fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

/// The response data format for all error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(super) struct ApiErrorData {
    pub message: String,
}

#[cfg(test)]
mod test {
    use super::*;

    use quake_core::FetchError;

    #[test]
    fn test_feed_failure_is_bad_gateway() {
        let error = ApiError::from(RenderMapError::Feed(FetchError::Status { status: 503 }));

        assert_eq!(
            error,
            ApiError::BadGateway("earthquake feed answered with status 503".to_string())
        );
        assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(error.message(), "earthquake feed answered with status 503");
    }
}
