//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::SessionAuthenticator;
use crate::domain::ports::{DirectoryReset, LoginService, SessionUserQuery};

/// Port implementations used by the session handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Resolves a username for `POST /login`.
    pub login: Arc<dyn LoginService>,
    /// Resolves the session's user for `GET /check_session`.
    pub session_users: Arc<dyn SessionUserQuery>,
    /// Wipes and reseeds the directory for `GET /clear`.
    pub directory_reset: Arc<dyn DirectoryReset>,
}

impl HttpState {
    /// Route every port to the same authenticator.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use session_auth::domain::SessionAuthenticator;
    /// use session_auth::inbound::http::state::HttpState;
    /// use session_auth::outbound::memory::InMemoryUserDirectory;
    ///
    /// let service = SessionAuthenticator::new(Arc::new(InMemoryUserDirectory::new()));
    /// let state = HttpState::from_authenticator(Arc::new(service));
    /// let _login = state.login.clone();
    /// ```
    pub fn from_authenticator(service: Arc<SessionAuthenticator>) -> Self {
        Self {
            login: service.clone(),
            session_users: service.clone(),
            directory_reset: service,
        }
    }
}
