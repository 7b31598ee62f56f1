//! Translation of [`ApiException`] into the response envelope.
//!
//! This is the single place where a request failure becomes a response body.
//! Handlers return [`HttpResult`]; axum resolves the `Err` arm through the
//! [`IntoResponse`] impl below, so every `ApiException` raised while handling
//! a request passes through [`api_exception`] exactly once. The HTTP status
//! is left untouched; callers read the outcome from the envelope `code`.

use crate::application::{ApiException, dto::Response};
use axum::{
    Json,
    response::{IntoResponse, Response as HttpResponse},
};

pub type HttpResult<T> = Result<T, ApiException>;

/// Wraps the exception's code and message into `{code, data: message}`.
#[must_use]
pub fn api_exception(e: ApiException) -> Response<String> {
    let (code, message) = e.into_parts();
    Response::new(code, message)
}

impl IntoResponse for ApiException {
    fn into_response(self) -> HttpResponse {
        tracing::warn!(code = %self.code(), message = %self.message(), "api exception");
        Json(api_exception(self)).into_response()
    }
}
