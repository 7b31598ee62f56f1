// src/config.rs
use std::{env, net::SocketAddr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: SocketAddr,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(ToString::to_string)
        .collect()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        Self::from_values(
            env::var("LISTEN_ADDR").ok().as_deref(),
            env::var("ALLOWED_ORIGINS").ok().as_deref(),
        )
    }

    fn from_values(
        listen_addr: Option<&str>,
        allowed_origins: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let raw_addr = listen_addr.unwrap_or(DEFAULT_LISTEN_ADDR);
        let listen_addr = raw_addr.parse::<SocketAddr>().map_err(|err| {
            ConfigError::Invalid(format!("LISTEN_ADDR `{raw_addr}` is not a socket address: {err}"))
        })?;

        let allowed_origins = allowed_origins
            .map(parse_origins)
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            listen_addr,
            allowed_origins,
        })
    }

    #[must_use]
    pub const fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    /// Return the allowed CORS origins as configured.
    #[must_use]
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
