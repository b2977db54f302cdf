//! End-to-end session lifecycle over the assembled application.
//!
//! Exercises login, session checks, logout and directory reset through the
//! same middleware stack the server binary uses, backed by the in-memory
//! directory.

mod support;

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test::{self as actix_test, TestRequest};
use rstest::rstest;
use serde_json::{Value, json};
use session_auth::domain::TRACE_ID_HEADER;
use support::{app, seeded_authenticator, session_cookie};

fn attach(request: TestRequest, cookie: Option<&Cookie<'static>>) -> TestRequest {
    match cookie {
        Some(cookie) => request.cookie(cookie.clone()),
        None => request,
    }
}

fn login(username: &str) -> TestRequest {
    TestRequest::post()
        .uri("/login")
        .set_json(json!({ "username": username }))
}

fn check(cookie: Option<&Cookie<'static>>) -> TestRequest {
    attach(TestRequest::get().uri("/check_session"), cookie)
}

fn logout(cookie: Option<&Cookie<'static>>) -> TestRequest {
    attach(TestRequest::delete().uri("/logout"), cookie)
}

#[rstest]
#[actix_web::test]
async fn full_session_lifecycle() {
    let service = actix_test::init_service(app(seeded_authenticator(), true)).await;

    let res = actix_test::call_service(&service, TestRequest::get().uri("/clear").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = actix_test::call_service(&service, login("bob").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let cookie = session_cookie(&res).expect("login sets the session cookie");
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({"id": 2, "username": "bob"}));

    let res = actix_test::call_service(&service, check(Some(&cookie)).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({"id": 2, "username": "bob"}));

    let res = actix_test::call_service(&service, logout(Some(&cookie)).to_request()).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let cleared = session_cookie(&res).expect("logout rewrites the session cookie");

    let res = actix_test::call_service(&service, check(Some(&cleared)).to_request()).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({}));
}

#[rstest]
#[case::unknown(json!({"username": "dave"}), StatusCode::NOT_FOUND)]
#[case::missing(json!({}), StatusCode::BAD_REQUEST)]
#[case::empty(json!({"username": ""}), StatusCode::BAD_REQUEST)]
#[actix_web::test]
async fn rejected_login_sets_no_session(#[case] payload: Value, #[case] expected: StatusCode) {
    let service = actix_test::init_service(app(seeded_authenticator(), false)).await;

    let req = TestRequest::post().uri("/login").set_json(payload).to_request();
    let res = actix_test::call_service(&service, req).await;
    assert_eq!(res.status(), expected);
    assert!(session_cookie(&res).is_none());
    let body: Value = actix_test::read_body_json(res).await;
    assert!(body["message"].is_string());
}

#[rstest]
#[actix_web::test]
async fn logout_without_session_is_no_content() {
    let service = actix_test::init_service(app(seeded_authenticator(), false)).await;

    for _ in 0..2 {
        let res = actix_test::call_service(&service, logout(None).to_request()).await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }
}

#[rstest]
#[actix_web::test]
async fn clear_is_not_routed_when_disabled() {
    let service = actix_test::init_service(app(seeded_authenticator(), false)).await;

    let res = actix_test::call_service(&service, TestRequest::get().uri("/clear").to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn clear_restores_seed_users_after_login() {
    let service = actix_test::init_service(app(seeded_authenticator(), true)).await;

    let res = actix_test::call_service(&service, login("charlie").to_request()).await;
    let cookie = session_cookie(&res).expect("login sets the session cookie");

    let res = actix_test::call_service(&service, TestRequest::get().uri("/clear").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = actix_test::call_service(&service, check(Some(&cookie)).to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body, json!({"id": 3, "username": "charlie"}));
}

#[rstest]
#[case("/check_session")]
#[case("/health/ready")]
#[actix_web::test]
async fn responses_carry_trace_id(#[case] uri: &str) {
    let service = actix_test::init_service(app(seeded_authenticator(), false)).await;

    let res = actix_test::call_service(&service, TestRequest::get().uri(uri).to_request()).await;
    let trace_id = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .expect("trace id header");
    assert!(trace_id.parse::<uuid::Uuid>().is_ok());
}
