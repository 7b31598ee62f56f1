//! Article API answering every request with a `{code, data}` envelope.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
