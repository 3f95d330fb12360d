use chrono::Utc;
use uuid::Uuid;

use courtside::config::jwt::JwtConfig;
use courtside::utils::jwt::{TokenError, issue_token, verify_token};

mod common;

#[test]
fn test_issue_and_verify_round_trip() {
    let jwt_config = common::test_jwt_config();
    let user_id = Uuid::new_v4();

    let token = issue_token(user_id, &jwt_config).unwrap();
    let claims = verify_token(&token, &jwt_config).unwrap();

    assert_eq!(claims.data.as_deref(), Some(user_id.to_string().as_str()));
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_verify_with_wrong_secret_is_invalid_signature() {
    let jwt_config = common::test_jwt_config();
    let other_config = JwtConfig {
        secret: "a_completely_different_secret".to_string(),
        access_token_expiry: 3600,
    };

    let token = issue_token(Uuid::new_v4(), &other_config).unwrap();

    assert_eq!(
        verify_token(&token, &jwt_config),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn test_verify_expired_token() {
    let jwt_config = common::test_jwt_config();
    let now = Utc::now().timestamp() as usize;
    let claims = courtside::modules::auth::model::Claims {
        data: Some(Uuid::new_v4().to_string()),
        iat: now - 7200,
        exp: now - 3600,
    };

    let token = common::sign_claims(&claims, &jwt_config.secret);

    assert_eq!(verify_token(&token, &jwt_config), Err(TokenError::Expired));
}

#[test]
fn test_verify_garbage_token_is_malformed() {
    let jwt_config = common::test_jwt_config();

    assert_eq!(
        verify_token("not-a-jwt-at-all", &jwt_config),
        Err(TokenError::Malformed)
    );
    assert_eq!(verify_token("", &jwt_config), Err(TokenError::Malformed));
}

#[test]
fn test_verify_tampered_payload_is_invalid_signature() {
    let jwt_config = common::test_jwt_config();
    let token = issue_token(Uuid::new_v4(), &jwt_config).unwrap();

    // Swap the payload segment for one signed under a different claim set.
    let other = issue_token(Uuid::new_v4(), &jwt_config).unwrap();
    let parts: Vec<&str> = token.split('.').collect();
    let other_parts: Vec<&str> = other.split('.').collect();
    let tampered = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);

    assert_eq!(
        verify_token(&tampered, &jwt_config),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn test_verify_accepts_token_without_data_claim() {
    // A signed token whose payload lacks `data` verifies at this layer;
    // rejecting it is the auth extractor's job.
    let jwt_config = common::test_jwt_config();
    let now = Utc::now().timestamp() as usize;
    let claims = courtside::modules::auth::model::Claims {
        data: None,
        iat: now,
        exp: now + 3600,
    };

    let token = common::sign_claims(&claims, &jwt_config.secret);
    let decoded = verify_token(&token, &jwt_config).unwrap();

    assert!(decoded.data.is_none());
}
