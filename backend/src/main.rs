//! Backend entry-point: loads settings, seeds the directory and serves the
//! session API.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, build_authenticator, create_server};
use session_auth::inbound::http::health::HealthState;
use session_auth::inbound::http::session_config::{BuildMode, session_settings_from_env};
use session_auth::outbound::persistence::{DbPool, PoolConfig};
use session_auth::settings::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
    if let Err(e) = color_eyre::install() {
        warn!(error = %e, "error report hook install failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let mut config = ServerConfig::new(session, settings.bind_addr())
        .with_reset_enabled(settings.reset_enabled)
        .with_cors_origins(settings.cors_origins());
    if let Some(url) = settings.database_url() {
        let pool = DbPool::new(PoolConfig::new(url))
            .await
            .map_err(|e| std::io::Error::other(format!("database pool: {e}")))?;
        config = config.with_db_pool(pool);
    }

    let authenticator = build_authenticator(config.db_pool.as_ref());
    if settings.seed_on_startup() {
        authenticator
            .ensure_seeded()
            .await
            .map_err(|e| std::io::Error::other(format!("startup seed failed: {e}")))?;
    }

    info!(
        addr = %settings.bind_addr(),
        reset_enabled = settings.reset_enabled,
        "starting session server"
    );
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config, authenticator)?.await
}
