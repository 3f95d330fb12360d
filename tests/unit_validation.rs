use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::routing::post;
use http_body_util::BodyExt;
use tower::ServiceExt;

use courtside::modules::auth::model::RegisterRequestDto;
use courtside::validator::ValidatedJson;

async fn accept(ValidatedJson(_dto): ValidatedJson<RegisterRequestDto>) -> StatusCode {
    StatusCode::CREATED
}

fn app() -> Router {
    Router::new().route("/register", post(accept))
}

fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .uri("/register")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_error(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    value["error"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_valid_body_passes_through() {
    let response = app()
        .oneshot(json_request(
            r#"{"first_name":"Ada","last_name":"Lovelace","email":"ada@example.com","password":"longenough"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_missing_field_is_bad_request() {
    let response = app()
        .oneshot(json_request(
            r#"{"first_name":"Ada","last_name":"Lovelace","password":"longenough"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_error(response).await, "email is required");
}

#[tokio::test]
async fn test_rule_violation_is_bad_request() {
    let response = app()
        .oneshot(json_request(
            r#"{"first_name":"Ada","last_name":"Lovelace","email":"not-an-email","password":"longenough"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_error(response).await.contains("email"));
}

#[tokio::test]
async fn test_short_password_is_bad_request() {
    let response = app()
        .oneshot(json_request(
            r#"{"first_name":"Ada","last_name":"Lovelace","email":"ada@example.com","password":"short"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_wrong_field_type_is_bad_request() {
    let response = app()
        .oneshot(json_request(
            r#"{"first_name":1,"last_name":"Lovelace","email":"ada@example.com","password":"longenough"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
