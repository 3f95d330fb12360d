//! Drives the auth extractor through a real axum router with oneshot
//! requests. The pool is lazy, so none of these paths touch a database.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::routing::get;
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use courtside::middleware::auth::AuthUser;
use courtside::modules::auth::model::Claims;
use courtside::router::init_router;
use courtside::utils::jwt::issue_token;

mod common;

async fn whoami(auth_user: AuthUser) -> String {
    auth_user.user_id.to_string()
}

fn test_app() -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .with_state(common::test_state())
}

async fn body_error(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    value["error"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_missing_authorization_header() {
    let response = test_app()
        .oneshot(Request::builder().uri("/whoami").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_error(response).await, "Invalid token, no token");
}

#[tokio::test]
async fn test_wrongly_signed_token() {
    let other_config = courtside::config::jwt::JwtConfig {
        secret: "not_the_configured_secret".to_string(),
        access_token_expiry: 3600,
    };
    let token = issue_token(Uuid::new_v4(), &other_config).unwrap();

    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header(header::AUTHORIZATION, token)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_error(response).await, "Invalid token signature");
}

#[tokio::test]
async fn test_expired_token() {
    let jwt_config = common::test_jwt_config();
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        data: Some(Uuid::new_v4().to_string()),
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = common::sign_claims(&claims, &jwt_config.secret);

    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header(header::AUTHORIZATION, token)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_error(response).await, "Token expired");
}

#[tokio::test]
async fn test_valid_token_missing_data_claim() {
    let jwt_config = common::test_jwt_config();
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        data: None,
        iat: now,
        exp: now + 3600,
    };
    let token = common::sign_claims(&claims, &jwt_config.secret);

    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header(header::AUTHORIZATION, token)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_error(response).await, "Invalid token, no payload.data");
}

#[tokio::test]
async fn test_valid_token_attaches_identity() {
    let jwt_config = common::test_jwt_config();
    let user_id = Uuid::new_v4();
    let token = issue_token(user_id, &jwt_config).unwrap();

    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header(header::AUTHORIZATION, token)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(bytes, user_id.to_string().as_bytes());
}

#[tokio::test]
async fn test_bearer_prefixed_header_is_rejected() {
    // The extractor takes the first whitespace-delimited segment, so a
    // conventional `Bearer <token>` header presents the literal word
    // `Bearer` for verification, which fails.
    let jwt_config = common::test_jwt_config();
    let token = issue_token(Uuid::new_v4(), &jwt_config).unwrap();

    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/whoami")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_error(response).await, "Malformed token");
}

#[tokio::test]
async fn test_health_route_is_open() {
    let app = init_router(common::test_state());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_admin_routes_reject_anonymous_requests() {
    let app = init_router(common::test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_error(response).await, "Invalid token, no token");
}
