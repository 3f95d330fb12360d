use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::{check_admin_or_coach, fetch_role};
use crate::modules::sessions::model::{
    Booking, CreateSessionDto, Session, SessionAttendee, SessionFilterParams, UpdateSessionDto,
};
use crate::modules::sessions::service::SessionService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::{ValidatedJson, ValidatedQuery};

/// List sessions, optionally filtered by category or coach. Public.
#[utoipa::path(
    get,
    path = "/api/sessions",
    params(SessionFilterParams),
    responses((status = 200, description = "List of sessions", body = Vec<Session>)),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn get_sessions(
    State(state): State<AppState>,
    ValidatedQuery(filters): ValidatedQuery<SessionFilterParams>,
) -> Result<Json<Vec<Session>>, AppError> {
    let sessions = SessionService::get_sessions(&state.db, filters).await?;
    Ok(Json(sessions))
}

/// Fetch a single session. Public.
#[utoipa::path(
    get,
    path = "/api/sessions/{id}",
    params(("id" = Uuid, Path, description = "Session id")),
    responses(
        (status = 200, description = "The session", body = Session),
        (status = 404, description = "Session not found")
    ),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, AppError> {
    let session = SessionService::get_session(&state.db, id).await?;
    Ok(Json(session))
}

/// Create a session. Admins may create for any coach; coaches only for
/// themselves (the owning coach comes from the request body).
#[utoipa::path(
    post,
    path = "/api/sessions",
    request_body = CreateSessionDto,
    responses(
        (status = 201, description = "Session created", body = Session),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - admin or owning coach required")
    ),
    security(("bearer_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip(state, dto))]
pub async fn create_session(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateSessionDto>,
) -> Result<(StatusCode, Json<Session>), AppError> {
    let role = fetch_role(&state.db, auth_user.user_id).await?;
    check_admin_or_coach(&role, auth_user.user_id, dto.coach_id)?;

    let session = SessionService::create_session(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// Update a session. Admin, or the coach who owns it.
#[utoipa::path(
    put,
    path = "/api/sessions/{id}",
    params(("id" = Uuid, Path, description = "Session id")),
    request_body = UpdateSessionDto,
    responses(
        (status = 200, description = "Session updated", body = Session),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - admin or owning coach required"),
        (status = 404, description = "Session not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip(state, dto))]
pub async fn update_session(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateSessionDto>,
) -> Result<Json<Session>, AppError> {
    let session = SessionService::get_session(&state.db, id).await?;
    let role = fetch_role(&state.db, auth_user.user_id).await?;
    check_admin_or_coach(&role, auth_user.user_id, session.coach_id)?;

    let session = SessionService::update_session(&state.db, id, dto).await?;
    Ok(Json(session))
}

/// Delete a session. Admin, or the coach who owns it.
#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    params(("id" = Uuid, Path, description = "Session id")),
    responses(
        (status = 204, description = "Session deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - admin or owning coach required"),
        (status = 404, description = "Session not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn delete_session(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let session = SessionService::get_session(&state.db, id).await?;
    let role = fetch_role(&state.db, auth_user.user_id).await?;
    check_admin_or_coach(&role, auth_user.user_id, session.coach_id)?;

    SessionService::delete_session(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Book a spot in a session for the authenticated user.
#[utoipa::path(
    post,
    path = "/api/sessions/{id}/book",
    params(("id" = Uuid, Path, description = "Session id")),
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 400, description = "Session full or already booked"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Session not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn book_session(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking = SessionService::book_session(&state.db, id, auth_user.user_id).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Cancel the authenticated user's booking.
#[utoipa::path(
    delete,
    path = "/api/sessions/{id}/book",
    params(("id" = Uuid, Path, description = "Session id")),
    responses(
        (status = 204, description = "Booking cancelled"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No booking for this session")
    ),
    security(("bearer_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn cancel_booking(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    SessionService::cancel_booking(&state.db, id, auth_user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List a session's attendees. Admin, or the coach who owns it.
#[utoipa::path(
    get,
    path = "/api/sessions/{id}/bookings",
    params(("id" = Uuid, Path, description = "Session id")),
    responses(
        (status = 200, description = "List of attendees", body = Vec<SessionAttendee>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - admin or owning coach required"),
        (status = 404, description = "Session not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn get_session_bookings(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<SessionAttendee>>, AppError> {
    let session = SessionService::get_session(&state.db, id).await?;
    let role = fetch_role(&state.db, auth_user.user_id).await?;
    check_admin_or_coach(&role, auth_user.user_id, session.coach_id)?;

    let attendees = SessionService::get_attendees(&state.db, id).await?;
    Ok(Json(attendees))
}
