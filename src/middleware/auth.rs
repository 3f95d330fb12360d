use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that validates the bearer token and carries the caller's
/// identity for the rest of the request. Created here, read by role
/// middlewares and controllers, dropped when the request ends.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub claims: Claims,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // The token is the first whitespace-delimited segment of the
        // Authorization header. There is no `Bearer` scheme stripping:
        // clients send the raw token, and a conventional `Bearer <token>`
        // header yields the literal word `Bearer`, which fails
        // verification. See DESIGN.md before changing this.
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split_whitespace().next())
            .ok_or_else(|| AppError::unauthorized("Invalid token, no token"))?;

        let claims = verify_token(token, &state.jwt_config)
            .map_err(|e| AppError::unauthorized(e.to_string()))?;

        let subject = claims
            .data
            .as_deref()
            .ok_or_else(|| AppError::unauthorized("Invalid token, no payload.data"))?;

        let user_id = Uuid::parse_str(subject)
            .map_err(|_| AppError::unauthorized("Invalid user id in token"))?;

        Ok(AuthUser { user_id, claims })
    }
}
