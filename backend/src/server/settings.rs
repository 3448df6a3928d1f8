//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `EMPLOYEES_*` environment variables or a
//! configuration file, in OrthoConfig's usual precedence.

use std::net::SocketAddr;

use employee_backend::outbound::persistence::PoolConfig;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Settings controlling the listener and the employee store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EMPLOYEES")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without one the server keeps employees in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Leave the schema untouched at startup.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl ServerSettings {
    /// Parse the configured bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Pool configuration, present only when a database URL is set.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref()?;
        let config = PoolConfig::new(url);
        Some(match self.pool_max_size {
            Some(max_size) => config.with_max_size(max_size),
            None => config,
        })
    }
}
