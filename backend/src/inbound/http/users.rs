//! Session lifecycle handlers.
//!
//! ```text
//! POST /login {"username":"bob"}
//! DELETE /logout
//! GET /check_session
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::domain::{Error, LoginValidationError, User, login_username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{EmptyObjectSchema, ErrorSchema, UserSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /login`.
///
/// A missing `username` is accepted here and rejected by validation so both
/// cases share one error payload.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Username to resolve; absent or `null` is rejected with 400.
    #[serde(default)]
    #[schema(example = "bob")]
    pub username: Option<String>,
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    let code = match err {
        LoginValidationError::MissingUsername => "missing_username",
        LoginValidationError::EmptyUsername => "empty_username",
    };
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": "username", "code": code }))
}

fn unauthenticated() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({}))
}

/// Resolve a username and bind the user to the session.
///
/// No credential of any kind is checked.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session established", body = UserSchema,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Missing or empty username", body = ErrorSchema),
        (status = 404, description = "No user with that username", body = ErrorSchema),
        (status = 503, description = "User directory unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["session"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<User>> {
    let username =
        login_username(payload.into_inner().username).map_err(map_login_validation_error)?;
    let user = state.login.login(&username).await?;
    session.persist_user(user.id())?;
    info!(user_id = user.id().get(), "session established");
    Ok(web::Json(user))
}

/// Remove the user from the session. Idempotent.
#[utoipa::path(
    delete,
    path = "/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["session"],
    operation_id = "logout"
)]
#[delete("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear_user();
    HttpResponse::NoContent().finish()
}

/// Return the user bound to the session.
///
/// A session whose user no longer exists answers like an anonymous one and is
/// left untouched.
#[utoipa::path(
    get,
    path = "/check_session",
    responses(
        (status = 200, description = "Authenticated user", body = UserSchema),
        (status = 401, description = "No authenticated user", body = EmptyObjectSchema),
        (status = 503, description = "User directory unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["session"],
    operation_id = "checkSession"
)]
#[get("/check_session")]
pub async fn check_session(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let Some(user_id) = session.state().user_id() else {
        return Ok(unauthenticated());
    };

    match state.session_users.session_user(user_id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => {
            debug!(user_id = user_id.get(), "session references a missing user");
            Ok(unauthenticated())
        }
    }
}
