//! Shared helpers for backend integration tests.
//!
//! Integration tests compile as separate crates, so the app assembly lives
//! here instead of being repeated per file.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key, SameSite};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use session_auth::Trace;
use session_auth::domain::{SEED_USERNAMES, SessionAuthenticator, Username};
use session_auth::inbound::http::health::{HealthState, live, ready};
use session_auth::inbound::http::routes;
use session_auth::inbound::http::session_config::{SESSION_COOKIE_NAME, SessionSettings};
use session_auth::inbound::http::state::HttpState;
use session_auth::outbound::memory::InMemoryUserDirectory;

/// Plain-HTTP session settings with a throwaway key.
pub fn session_settings() -> SessionSettings {
    SessionSettings {
        key: Key::generate(),
        cookie_secure: false,
        same_site: SameSite::Lax,
    }
}

/// Seed usernames as validated values.
pub fn seed_usernames() -> Vec<Username> {
    SEED_USERNAMES
        .iter()
        .map(|name| Username::new(*name).expect("seed username"))
        .collect()
}

/// Authenticator over an in-memory directory holding the seed users.
pub fn seeded_authenticator() -> Arc<SessionAuthenticator> {
    let directory =
        InMemoryUserDirectory::with_usernames(&seed_usernames()).expect("seed directory");
    Arc::new(SessionAuthenticator::new(Arc::new(directory)))
}

/// Assemble the application the way the server binary does, minus CORS and
/// Swagger UI.
pub fn app(
    authenticator: Arc<SessionAuthenticator>,
    reset_enabled: bool,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let health = web::Data::new(HealthState::new());
    health.mark_ready();

    App::new()
        .app_data(health)
        .app_data(web::Data::new(HttpState::from_authenticator(authenticator)))
        .wrap(session_settings().middleware())
        .wrap(Trace)
        .configure(|cfg| routes::configure(cfg, reset_enabled))
        .service(ready)
        .service(live)
}

/// Session cookie set by `response`, if any.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(Cookie::into_owned)
}
