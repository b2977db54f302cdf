//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;
pub(crate) use state_builders::build_authenticator;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{App, HttpServer, web};

use session_auth::Trace;
#[cfg(debug_assertions)]
use session_auth::doc::ApiDoc;
use session_auth::domain::SessionAuthenticator;
use session_auth::inbound::http::health::{HealthState, live, ready};
use session_auth::inbound::http::routes;
use session_auth::inbound::http::session_config::SessionSettings;
use session_auth::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

const CORS_MAX_AGE_SECS: usize = 3600;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    session: SessionSettings,
    cors_origins: Arc<[String]>,
    reset_enabled: bool,
}

/// Credentialed CORS for browser clients on another origin.
fn build_cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_header(header::CONTENT_TYPE)
        .supports_credentials()
        .max_age(CORS_MAX_AGE_SECS);

    if origins.is_empty() {
        return cors.allowed_origin_fn(|_, _| true);
    }
    origins
        .iter()
        .fold(cors, |policy, origin| policy.allowed_origin(origin))
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        session,
        cors_origins,
        reset_enabled,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(session.middleware())
        .wrap(build_cors(&cors_origins))
        .wrap(Trace)
        .configure(|cfg| routes::configure(cfg, reset_enabled))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server over `authenticator`.
///
/// Readiness is flipped once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
    authenticator: Arc<SessionAuthenticator>,
) -> std::io::Result<Server> {
    let ServerConfig {
        session,
        bind_addr,
        reset_enabled,
        cors_origins,
        db_pool: _,
    } = config;

    let deps = AppDependencies {
        health_state: health_state.clone(),
        http_state: web::Data::new(HttpState::from_authenticator(authenticator)),
        session,
        cors_origins: cors_origins.into(),
        reset_enabled,
    };

    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    Ok(server)
}
