//! Simulated login and signup flow tests.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use shopsphere_integration_tests::build_app;

async fn post_form(app: &Router, uri: &str, body: &str) -> Response<axum::body::Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap()
}

fn location(response: &Response<axum::body::Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

async fn body_string(response: Response<axum::body::Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn login_succeeds_and_redirects_home() {
    let app = build_app();
    let response = post_form(
        &app,
        "/auth/login",
        "email=user%40example.com&password=secret123&remember=on",
    )
    .await;

    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn login_with_empty_fields_redirects_with_code() {
    let app = build_app();
    let response = post_form(&app, "/auth/login", "email=&password=").await;

    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/auth/login?error=missing_fields");
}

#[tokio::test]
async fn login_with_malformed_email_redirects_with_code() {
    let app = build_app();
    let response = post_form(&app, "/auth/login", "email=not-an-email&password=secret123").await;

    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/auth/login?error=invalid_email");
}

#[tokio::test]
async fn login_page_translates_error_codes() {
    let app = build_app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/auth/login?error=missing_fields")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Enter both email and password to continue."));
}

#[tokio::test]
async fn signup_succeeds_and_redirects_home() {
    let app = build_app();
    let response = post_form(
        &app,
        "/auth/signup",
        "first_name=Jamie&last_name=Lee&email=jamie%40example.com\
         &password=longenough&password_confirm=longenough&marketing=on",
    )
    .await;

    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn signup_rejects_password_mismatch() {
    let app = build_app();
    let response = post_form(
        &app,
        "/auth/signup",
        "first_name=Jamie&last_name=Lee&email=jamie%40example.com\
         &password=longenough&password_confirm=different1",
    )
    .await;

    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/auth/signup?error=password_mismatch");
}

#[tokio::test]
async fn signup_rejects_short_password() {
    let app = build_app();
    let response = post_form(
        &app,
        "/auth/signup",
        "first_name=Jamie&last_name=Lee&email=jamie%40example.com\
         &password=short&password_confirm=short",
    )
    .await;

    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/auth/signup?error=password_short");
}

#[tokio::test]
async fn signup_requires_names() {
    let app = build_app();
    let response = post_form(
        &app,
        "/auth/signup",
        "first_name=&last_name=&email=jamie%40example.com\
         &password=longenough&password_confirm=longenough",
    )
    .await;

    assert!(response.status().is_redirection());
    assert_eq!(location(&response), "/auth/signup?error=missing_name");
}
