//! Route table for the session API.

use actix_web::web;

use super::payload::json_config;
use super::{admin, users};

/// Register the session endpoints and the shared JSON extractor settings.
///
/// `GET /clear` is only registered when `reset_enabled` is true; otherwise the
/// path falls through to 404.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use session_auth::inbound::http::routes::configure;
///
/// let _app = App::new().configure(|cfg| configure(cfg, false));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig, reset_enabled: bool) {
    cfg.app_data(json_config())
        .service(users::login)
        .service(users::logout)
        .service(users::check_session);
    if reset_enabled {
        cfg.service(admin::clear);
    }
}
