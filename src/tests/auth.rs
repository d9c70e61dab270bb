use actix_web::http::StatusCode;
use rstest::*;
use serde_json::{Value, json};

use crate::domain::remote::RemoteError;
use crate::tests::{Error, TestContext, context};

use crate::app;
use actix_web::test;
use actix_web::test::TestRequest;

#[rstest]
#[actix_web::test]
async fn test_signup_success(context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(json!({
            "email": "new_user@divvy.dev",
            "password": "stR0ngP4ssw0rd!",
            "name": "New User",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(res).await;

    assert_eq!(body["user"]["email"], "new_user@divvy.dev");
    assert_eq!(body["user"]["user_metadata"]["name"], "New User");
}

#[rstest]
#[actix_web::test]
async fn test_signup_duplicate_email(context: TestContext) {
    context.remote.seed_account("taken@divvy.dev", "p4ssw0rd").await;

    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(json!({
            "email": "taken@divvy.dev",
            "password": "stR0ngP4ssw0rd!",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let err: Error = test::read_body_json(res).await;
    assert_eq!(err.error, "User already registered");
}

#[rstest]
#[actix_web::test]
async fn test_signup_remote_outage(context: TestContext) {
    *context.remote.fail_with.lock().await =
        Some(RemoteError::Transport("connection refused".to_string()));

    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/auth/signup")
        .set_json(json!({
            "email": "new_user@divvy.dev",
            "password": "stR0ngP4ssw0rd!",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let err: Error = test::read_body_json(res).await;
    assert_eq!(err.error, "Something went wrong");
}

#[rstest]
#[actix_web::test]
async fn test_signup_malformed_body(context: TestContext) {
    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/auth/signup")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ \"email\": }")
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let err: Error = test::read_body_json(res).await;
    assert_eq!(err.error, "Something went wrong");
}

#[rstest]
#[actix_web::test]
async fn test_login_success(context: TestContext) {
    context.remote.seed_account("user@divvy.dev", "stR0ngP4ssw0rd!").await;

    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "email": "user@divvy.dev",
            "password": "stR0ngP4ssw0rd!",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;

    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["data"]["user"]["email"], "user@divvy.dev");
    assert!(body["data"]["access_token"].is_string());
}

#[rstest]
#[case::unknown_account("nobody@divvy.dev", "stR0ngP4ssw0rd!")]
#[case::wrong_password("user@divvy.dev", "wr0ngP4ssw0rd!")]
#[actix_web::test]
async fn test_login_invalid_credentials(
    context: TestContext,
    #[case] email: &str,
    #[case] password: &str,
) {
    context.remote.seed_account("user@divvy.dev", "stR0ngP4ssw0rd!").await;

    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({
            "email": email,
            "password": password,
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let err: Error = test::read_body_json(res).await;
    assert_eq!(err.error, "Invalid login credentials");
}
