//! Role-based authorization gates.
//!
//! Two forms, both built on the same pure predicates:
//!
//! 1. Layer-style middleware (`require_admin`, `require_profile_owner`)
//!    applied with `axum::middleware::from_fn_with_state` to whole
//!    sub-routers.
//! 2. Extractors (`RequireAdmin`, `RequireCoachSelf`,
//!    `RequireAdminOrCoachSelf`) for routes where methods on the same
//!    path need different gates.
//!
//! Each gate performs at most one role lookup and one comparison. The
//! predicates themselves are pure: same identity and route parameters,
//! same answer.

use axum::{
    RequestPartsExt,
    extract::{FromRequestParts, Path, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Deserialize)]
struct CoachPath {
    coach_id: Uuid,
}

#[derive(Deserialize)]
struct OwnerPath {
    user_id: Uuid,
}

/// Fetches the caller's role. The single ownership/role lookup each gate
/// is allowed.
pub async fn fetch_role(db: &PgPool, user_id: Uuid) -> Result<UserRole, AppError> {
    sqlx::query_scalar::<_, UserRole>("SELECT role FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(db)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::forbidden("Access denied. Unknown user."))
}

/// The caller must hold the `admin` role.
pub fn check_admin(role: &UserRole) -> Result<(), AppError> {
    if *role != UserRole::Admin {
        return Err(AppError::forbidden(
            "Access denied. Administrator privileges required.",
        ));
    }
    Ok(())
}

/// The caller must be a coach acting on their own resource.
pub fn check_coach(role: &UserRole, user_id: Uuid, coach_id: Uuid) -> Result<(), AppError> {
    if *role != UserRole::Coach || user_id != coach_id {
        return Err(AppError::forbidden(
            "Access denied. Coaches may only act on their own resources.",
        ));
    }
    Ok(())
}

/// Admin predicate or coach predicate, in that order.
pub fn check_admin_or_coach(
    role: &UserRole,
    user_id: Uuid,
    coach_id: Uuid,
) -> Result<(), AppError> {
    if check_admin(role).is_ok() || check_coach(role, user_id, coach_id).is_ok() {
        return Ok(());
    }
    Err(AppError::forbidden(
        "Access denied. Administrator or owning-coach privileges required.",
    ))
}

/// The caller must own the targeted profile, or be an admin.
pub fn check_profile_owner(
    role: &UserRole,
    user_id: Uuid,
    owner_id: Uuid,
) -> Result<(), AppError> {
    if user_id == owner_id || *role == UserRole::Admin {
        return Ok(());
    }
    Err(AppError::forbidden(
        "Access denied. You may only manage your own profile.",
    ))
}

/// Layer-style gate for admin-only sub-routers.
///
/// ```rust,ignore
/// Router::new()
///     .nest("/users", init_users_router()
///         .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)))
/// ```
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    let role = fetch_role(&state.db, auth_user.user_id).await?;
    check_admin(&role)?;

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Layer-style gate for routes carrying a `{user_id}` parameter: the
/// caller must be that user, or an admin.
pub async fn require_profile_owner(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    let Path(OwnerPath { user_id }) = parts
        .extract::<Path<OwnerPath>>()
        .await
        .map_err(|_| AppError::bad_request(anyhow::anyhow!("Missing user_id route parameter")))?;

    let role = fetch_role(&state.db, auth_user.user_id).await?;
    check_profile_owner(&role, auth_user.user_id, user_id)?;

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Extractor gate: admin role required.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        let role = fetch_role(&state.db, auth_user.user_id).await?;
        check_admin(&role)?;

        Ok(RequireAdmin(auth_user))
    }
}

/// Extractor gate for routes with a `{coach_id}` parameter: the caller
/// must be that coach.
#[derive(Debug, Clone)]
pub struct RequireCoachSelf(pub AuthUser);

impl FromRequestParts<AppState> for RequireCoachSelf {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        let Path(CoachPath { coach_id }) = parts.extract::<Path<CoachPath>>().await.map_err(
            |_| AppError::bad_request(anyhow::anyhow!("Missing coach_id route parameter")),
        )?;

        let role = fetch_role(&state.db, auth_user.user_id).await?;
        check_coach(&role, auth_user.user_id, coach_id)?;

        Ok(RequireCoachSelf(auth_user))
    }
}

/// Extractor gate for routes with a `{coach_id}` parameter: the caller
/// must be an admin or that coach.
#[derive(Debug, Clone)]
pub struct RequireAdminOrCoachSelf(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdminOrCoachSelf {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        let Path(CoachPath { coach_id }) = parts.extract::<Path<CoachPath>>().await.map_err(
            |_| AppError::bad_request(anyhow::anyhow!("Missing coach_id route parameter")),
        )?;

        let role = fetch_role(&state.db, auth_user.user_id).await?;
        check_admin_or_coach(&role, auth_user.user_id, coach_id)?;

        Ok(RequireAdminOrCoachSelf(auth_user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_admin() {
        assert!(check_admin(&UserRole::Admin).is_ok());
        assert!(check_admin(&UserRole::Coach).is_err());
        assert!(check_admin(&UserRole::User).is_err());
    }

    #[test]
    fn test_check_coach_requires_matching_id() {
        let id = Uuid::new_v4();
        assert!(check_coach(&UserRole::Coach, id, id).is_ok());
        assert!(check_coach(&UserRole::Coach, id, Uuid::new_v4()).is_err());
        assert!(check_coach(&UserRole::Admin, id, id).is_err());
    }

    #[test]
    fn test_check_profile_owner_admin_override() {
        let owner = Uuid::new_v4();
        assert!(check_profile_owner(&UserRole::User, owner, owner).is_ok());
        assert!(check_profile_owner(&UserRole::Admin, Uuid::new_v4(), owner).is_ok());
        assert!(check_profile_owner(&UserRole::User, Uuid::new_v4(), owner).is_err());
    }
}
