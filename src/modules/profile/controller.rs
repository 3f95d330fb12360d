use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::{RequireAdminOrCoachSelf, RequireCoachSelf};
use crate::modules::coaches::model::{Coach, UpdateCoachDto};
use crate::modules::coaches::service::CoachService;
use crate::modules::profile::model::UpdateProfileDto;
use crate::modules::profile::service::ProfileService;
use crate::modules::users::model::User;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Fetch a user profile. Owner or admin; the gate is applied at the
/// router level.
#[utoipa::path(
    get,
    path = "/api/profile/user/{user_id}",
    params(("user_id" = Uuid, Path, description = "Profile owner's user id")),
    responses(
        (status = 200, description = "The profile", body = User),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the profile owner"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Profile"
)]
#[instrument(skip(state))]
pub async fn get_user_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let user = UserService::get_user(&state.db, user_id).await?;
    Ok(Json(user))
}

/// Update a user profile. Owner or admin.
#[utoipa::path(
    put,
    path = "/api/profile/user/{user_id}",
    params(("user_id" = Uuid, Path, description = "Profile owner's user id")),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = User),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the profile owner"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Profile"
)]
#[instrument(skip(state, dto))]
pub async fn update_user_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateProfileDto>,
) -> Result<Json<User>, AppError> {
    let user = ProfileService::update_profile(&state.db, user_id, dto).await?;
    Ok(Json(user))
}

/// Delete a user account. Owner or admin.
#[utoipa::path(
    delete,
    path = "/api/profile/user/{user_id}",
    params(("user_id" = Uuid, Path, description = "Profile owner's user id")),
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the profile owner"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Profile"
)]
#[instrument(skip(state))]
pub async fn delete_user_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    ProfileService::delete_profile(&state.db, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fetch a coach profile. Any authenticated user.
#[utoipa::path(
    get,
    path = "/api/profile/coach/{coach_id}",
    params(("coach_id" = Uuid, Path, description = "Coach user id")),
    responses(
        (status = 200, description = "The coach profile", body = Coach),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Coach not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Profile"
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_coach_profile(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(coach_id): Path<Uuid>,
) -> Result<Json<Coach>, AppError> {
    let coach = CoachService::get_coach(&state.db, coach_id).await?;
    Ok(Json(coach))
}

/// Update a coach profile. Admin, or the coach themselves.
#[utoipa::path(
    put,
    path = "/api/profile/coach/{coach_id}",
    params(("coach_id" = Uuid, Path, description = "Coach user id")),
    request_body = UpdateCoachDto,
    responses(
        (status = 200, description = "Updated coach profile", body = Coach),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - admin or owning coach required"),
        (status = 404, description = "Coach not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Profile"
)]
#[instrument(skip(state, dto))]
pub async fn update_coach_profile(
    State(state): State<AppState>,
    RequireAdminOrCoachSelf(_auth_user): RequireAdminOrCoachSelf,
    Path(coach_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateCoachDto>,
) -> Result<Json<Coach>, AppError> {
    let coach = CoachService::update_coach(&state.db, coach_id, dto).await?;
    Ok(Json(coach))
}

/// Delete a coach profile. Only the owning coach.
#[utoipa::path(
    delete,
    path = "/api/profile/coach/{coach_id}",
    params(("coach_id" = Uuid, Path, description = "Coach user id")),
    responses(
        (status = 204, description = "Coach profile deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - not the owning coach"),
        (status = 404, description = "Coach not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Profile"
)]
#[instrument(skip(state))]
pub async fn delete_coach_profile(
    State(state): State<AppState>,
    RequireCoachSelf(_auth_user): RequireCoachSelf,
    Path(coach_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    CoachService::delete_coach(&state.db, coach_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
