//! Directory maintenance endpoint.
//!
//! ```text
//! GET /clear
//! ```
//!
//! Registered only when resets are enabled in settings.

use actix_web::{HttpResponse, get, web};
use tracing::info;

use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Wipe the user directory and reseed alice, bob and charlie.
///
/// Existing sessions are not touched and may now reference missing users.
#[utoipa::path(
    get,
    path = "/clear",
    responses(
        (status = 200, description = "Directory reset and seeded"),
        (status = 503, description = "User directory unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["admin"],
    operation_id = "clearDirectory"
)]
#[get("/clear")]
pub async fn clear(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let users = state.directory_reset.reset_and_seed().await?;
    info!(count = users.len(), "user directory reset");
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Username;
    use crate::domain::ports::UserDirectory;
    use crate::inbound::http::test_utils::{seeded_directory, state_for};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;

    #[rstest]
    #[actix_web::test]
    async fn clear_restores_seed_users_with_fresh_ids() {
        let directory = seeded_directory();
        directory
            .reset_and_seed(&[Username::new("mallory").expect("valid username")])
            .await
            .expect("replace directory");
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state_for(directory.clone())))
                .service(clear),
        )
        .await;

        for _ in 0..2 {
            let res =
                actix_test::call_service(&app, actix_test::TestRequest::get().uri("/clear").to_request()).await;
            assert_eq!(res.status(), StatusCode::OK);
            let body = actix_test::read_body(res).await;
            assert!(body.is_empty());
        }

        for (id, name) in [(1, "alice"), (2, "bob"), (3, "charlie")] {
            let user = directory
                .find_by_username(&Username::new(name).expect("valid username"))
                .await
                .expect("lookup")
                .expect("seed user present");
            assert_eq!(user.id().get(), id);
        }
        let mallory = directory
            .find_by_username(&Username::new("mallory").expect("valid username"))
            .await
            .expect("lookup");
        assert!(mallory.is_none());
    }
}
