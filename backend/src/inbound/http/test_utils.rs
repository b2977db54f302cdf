//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;

use crate::domain::{SEED_USERNAMES, SessionAuthenticator, Username};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryUserDirectory;

/// Build a session middleware configured for tests.
///
/// Generates a fresh key per invocation, names the cookie `session` and
/// disables the `Secure` flag for plain HTTP test requests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Extract the `session` cookie set by a response.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie set")
        .into_owned()
}

/// In-memory directory holding alice (1), bob (2) and charlie (3).
pub fn seeded_directory() -> Arc<InMemoryUserDirectory> {
    let usernames: Vec<Username> = SEED_USERNAMES
        .iter()
        .map(|name| Username::new(*name).expect("seed username"))
        .collect();
    Arc::new(InMemoryUserDirectory::with_usernames(&usernames).expect("seed directory"))
}

/// HTTP state backed by `directory`.
pub fn state_for(directory: Arc<InMemoryUserDirectory>) -> HttpState {
    HttpState::from_authenticator(Arc::new(SessionAuthenticator::new(directory)))
}
