//! Host configuration parsed from environment variables.

use client::config::BackendConfig;

pub const DEFAULT_PORT: u16 = 3000;

/// Errors raised while assembling the host.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    /// Leptos site options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the recognition backend, published to the browser.
    pub backend_url: String,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `BACKEND_URL`: recognition backend base URL, default
    ///   `http://localhost:5001` (trailing `/` trimmed)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("BACKEND_URL").ok().as_deref(),
        )
    }

    fn from_values(port: Option<&str>, backend_url: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
        };
        let backend = backend_url.map_or_else(BackendConfig::default, BackendConfig::new);
        Ok(Self { port, backend_url: backend.base_url().to_owned() })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
