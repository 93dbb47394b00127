//! Host configuration parsed from environment variables.
//!
//! Leptos site settings (output name, site root, reload port) are read by
//! Leptos itself from `Cargo.toml` metadata or `LEPTOS_*` variables; this
//! module only covers the listener.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: String,
    pub port: u16,
}

impl HostConfig {
    /// Build listener config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    pub fn from_env() -> Result<Self, HostError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let bind_addr = std::env::var("BIND_ADDR")
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        Ok(Self { bind_addr, port })
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, HostError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| HostError::InvalidPort(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
