//! Builders for the user directory and HTTP state.

use std::sync::Arc;

use tracing::warn;

use session_auth::domain::SessionAuthenticator;
use session_auth::domain::ports::UserDirectory;
use session_auth::outbound::memory::InMemoryUserDirectory;
use session_auth::outbound::persistence::{DbPool, DieselUserDirectory};

/// Select the PostgreSQL directory when a pool is configured, otherwise the
/// in-memory one.
pub(crate) fn build_user_directory(pool: Option<&DbPool>) -> Arc<dyn UserDirectory> {
    match pool {
        Some(pool) => Arc::new(DieselUserDirectory::new(pool.clone())),
        None => {
            warn!("no database configured; users are kept in memory and lost on restart");
            Arc::new(InMemoryUserDirectory::new())
        }
    }
}

/// Build the authenticator shared by every worker.
pub(crate) fn build_authenticator(pool: Option<&DbPool>) -> Arc<SessionAuthenticator> {
    Arc::new(SessionAuthenticator::new(build_user_directory(pool)))
}
