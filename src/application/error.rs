// src/application/error.rs
use crate::application::dto::ResponseCode;
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApiException>;

/// Failure raised while handling a request.
///
/// Raised where the failure happens and translated into a response envelope
/// exactly once, at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiException {
    code: ResponseCode,
    message: String,
}

impl ApiException {
    pub fn new(code: impl Into<ResponseCode>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(ResponseCode::BAD_REQUEST, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ResponseCode::NOT_FOUND, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ResponseCode::INTERNAL_ERROR, msg)
    }

    #[must_use]
    pub const fn code(&self) -> ResponseCode {
        self.code
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn into_parts(self) -> (ResponseCode, String) {
        (self.code, self.message)
    }
}

impl From<DomainError> for ApiException {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::bad_request(msg),
            DomainError::NotFound(msg) => Self::not_found(msg),
            DomainError::Persistence(msg) => Self::internal(msg),
        }
    }
}
