//! Server settings loaded via OrthoConfig.
//!
//! Values layer from defaults, an optional configuration file, `USERS_*`
//! environment variables and command-line flags.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use users_backend::outbound::persistence::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DEFAULT_MIN_IDLE, PoolConfig,
};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Listener and persistence settings for the HTTP server.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// PostgreSQL connection URL. Without it users live in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    pub pool_max_size: Option<u32>,
    /// Idle connections kept open.
    pub pool_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_connection_timeout_secs: Option<u64>,
}

impl ServerSettings {
    /// Address the listener binds to.
    pub fn bind_addr(&self) -> (String, u16) {
        (
            self.host.clone().unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool configuration for `database_url`.
    pub fn pool_config(&self, database_url: &str) -> PoolConfig {
        PoolConfig {
            max_size: self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE),
            min_idle: Some(self.pool_min_idle.unwrap_or(DEFAULT_MIN_IDLE)),
            connection_timeout: self
                .pool_connection_timeout_secs
                .map_or(DEFAULT_CONNECTION_TIMEOUT, Duration::from_secs),
            ..PoolConfig::new(database_url)
        }
    }
}
