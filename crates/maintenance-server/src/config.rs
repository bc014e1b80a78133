//! Server configuration for the maintenance module.
//!
//! Loads configuration from environment variables with sensible defaults.
//! All settings can be overridden via `PIMS_*` environment variables.

use std::net::SocketAddr;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT` — port to bind on (binds to `0.0.0.0`)
    /// - `PIMS_BIND_ADDR` — full bind address (overrides `PORT`, default: `127.0.0.1:8088`)
    /// - `PIMS_LOG_LEVEL` — log filter (default: `info`)
    #[must_use]
    pub fn from_env() -> Self {
        // Priority: PIMS_BIND_ADDR > PORT > default 127.0.0.1:8088
        let bind_addr = if let Ok(addr) = std::env::var("PIMS_BIND_ADDR") {
            addr.parse()
                .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 8088)))
        } else if let Ok(port_str) = std::env::var("PORT") {
            let port: u16 = port_str.parse().unwrap_or(8088);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            SocketAddr::from(([127, 0, 0, 1], 8088))
        };

        let log_level = std::env::var("PIMS_LOG_LEVEL").unwrap_or_else(|_| "info".to_owned());

        Self {
            bind_addr,
            log_level,
        }
    }
}
