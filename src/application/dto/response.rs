//! Uniform `{code, data}` envelope shared by success and error bodies.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Machine-readable result code carried in every envelope.
///
/// Serialized as a bare integer. It is independent from the HTTP status of
/// the response that carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ResponseCode(i32);

impl ResponseCode {
    pub const SUCCESS: Self = Self(200);
    pub const BAD_REQUEST: Self = Self(400);
    pub const NOT_FOUND: Self = Self(404);
    pub const INTERNAL_ERROR: Self = Self(500);

    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for ResponseCode {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Response<T> {
    pub code: ResponseCode,
    pub data: T,
}

impl<T> Response<T> {
    pub const fn new(code: ResponseCode, data: T) -> Self {
        Self { code, data }
    }

    pub const fn ok(data: T) -> Self {
        Self::new(ResponseCode::SUCCESS, data)
    }
}
