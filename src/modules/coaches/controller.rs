use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::RequireAdmin;
use crate::modules::coaches::model::{Coach, CreateCoachDto};
use crate::modules::coaches::service::CoachService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List all coaches. Public directory.
#[utoipa::path(
    get,
    path = "/api/coaches",
    responses((status = 200, description = "List of coaches", body = Vec<Coach>)),
    tag = "Coaches"
)]
#[instrument(skip(state))]
pub async fn get_coaches(State(state): State<AppState>) -> Result<Json<Vec<Coach>>, AppError> {
    let coaches = CoachService::get_coaches(&state.db).await?;
    Ok(Json(coaches))
}

/// Fetch a single coach. Public.
#[utoipa::path(
    get,
    path = "/api/coaches/{coach_id}",
    params(("coach_id" = Uuid, Path, description = "Coach user id")),
    responses(
        (status = 200, description = "The coach", body = Coach),
        (status = 404, description = "Coach not found")
    ),
    tag = "Coaches"
)]
#[instrument(skip(state))]
pub async fn get_coach(
    State(state): State<AppState>,
    Path(coach_id): Path<Uuid>,
) -> Result<Json<Coach>, AppError> {
    let coach = CoachService::get_coach(&state.db, coach_id).await?;
    Ok(Json(coach))
}

/// Promote a user to coach. Admin only.
#[utoipa::path(
    post,
    path = "/api/coaches",
    request_body = CreateCoachDto,
    responses(
        (status = 201, description = "Coach created", body = Coach),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - administrator role required"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Coaches"
)]
#[instrument(skip(state, dto))]
pub async fn create_coach(
    State(state): State<AppState>,
    RequireAdmin(_auth_user): RequireAdmin,
    ValidatedJson(dto): ValidatedJson<CreateCoachDto>,
) -> Result<(StatusCode, Json<Coach>), AppError> {
    let coach = CoachService::create_coach(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(coach)))
}

/// Demote a coach back to a regular user. Admin only.
#[utoipa::path(
    delete,
    path = "/api/coaches/{coach_id}",
    params(("coach_id" = Uuid, Path, description = "Coach user id")),
    responses(
        (status = 204, description = "Coach removed"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - administrator role required"),
        (status = 404, description = "Coach not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Coaches"
)]
#[instrument(skip(state))]
pub async fn delete_coach(
    State(state): State<AppState>,
    RequireAdmin(_auth_user): RequireAdmin,
    Path(coach_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    CoachService::delete_coach(&state.db, coach_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
