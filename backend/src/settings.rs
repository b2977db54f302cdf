//! Server settings loaded via OrthoConfig.
//!
//! Values come from `AUTH_SERVER_*` environment variables, configuration files
//! and command-line flags, in OrthoConfig's usual precedence.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 5555;

/// Settings controlling the listener, persistence and privileged routes.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "AUTH_SERVER")]
pub struct AppSettings {
    /// PostgreSQL connection URL. When absent the in-memory directory is used.
    pub database_url: Option<String>,
    /// Address to bind; defaults to all interfaces.
    pub bind_host: Option<IpAddr>,
    /// Port to bind; defaults to 5555.
    pub port: Option<u16>,
    /// Register `GET /clear`, which wipes and reseeds the directory.
    #[ortho_config(default = false)]
    pub reset_enabled: bool,
    /// Seed alice, bob and charlie into an empty directory at startup.
    /// Defaults to true; see [`AppSettings::seed_on_startup`].
    pub seed_on_startup: Option<bool>,
    /// Browser origins allowed to send credentialed requests, comma-separated
    /// in the environment. When absent any origin is echoed back.
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl AppSettings {
    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.bind_host.unwrap_or(DEFAULT_BIND_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Whether the startup seed runs.
    pub fn seed_on_startup(&self) -> bool {
        self.seed_on_startup.unwrap_or(true)
    }

    /// Configured CORS origins; empty means any origin.
    pub fn cors_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .iter()
            .flatten()
            .map(String::as_str)
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect()
    }
}
