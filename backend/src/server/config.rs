//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use session_auth::inbound::http::session_config::SessionSettings;
use session_auth::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) reset_enabled: bool,
    pub(crate) cors_origins: Vec<String>,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration from validated session settings.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr) -> Self {
        Self {
            session,
            bind_addr,
            reset_enabled: false,
            cors_origins: Vec::new(),
            db_pool: None,
        }
    }

    /// Attach a database connection pool.
    ///
    /// Without one the server keeps users in memory for the process lifetime.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Register `GET /clear`.
    #[must_use]
    pub fn with_reset_enabled(mut self, enabled: bool) -> Self {
        self.reset_enabled = enabled;
        self
    }

    /// Restrict credentialed cross-origin requests to these origins.
    /// An empty list echoes any origin.
    #[must_use]
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }
}
