//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the session endpoints, the directory reset endpoint,
//! the health checks and the schema wrappers from
//! [`crate::inbound::http::schemas`], which keep domain types free of utoipa.
//!
//! The document backs Swagger UI in debug builds and is printed by
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{
    EmptyObjectSchema, ErrorCodeSchema, ErrorSchema, UserSchema,
};
use crate::inbound::http::users::LoginRequest;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Encrypted session cookie issued by POST /login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Session authentication API",
        description = "Username login, session checks and directory reset over cookie sessions.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::check_session,
        crate::inbound::http::admin::clear,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        ErrorSchema,
        ErrorCodeSchema,
        EmptyObjectSchema,
        LoginRequest
    )),
    tags(
        (name = "session", description = "Login, logout and session checks"),
        (name = "admin", description = "Directory maintenance"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
