use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::sessions::model::{
    Booking, CreateSessionDto, Session, SessionAttendee, SessionFilterParams, UpdateSessionDto,
};
use crate::utils::errors::AppError;

const SESSION_COLUMNS: &str = "id, title, description, category_id, coach_id, starts_at,
 duration_minutes, capacity, price_cents, created_at, updated_at";

pub struct SessionService;

impl SessionService {
    pub async fn create_session(
        db: &PgPool,
        dto: CreateSessionDto,
    ) -> Result<Session, AppError> {
        let session = sqlx::query_as::<_, Session>(&format!(
            "INSERT INTO sessions
                 (title, description, category_id, coach_id, starts_at,
                  duration_minutes, capacity, price_cents)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {SESSION_COLUMNS}"
        ))
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.category_id)
        .bind(dto.coach_id)
        .bind(dto.starts_at)
        .bind(dto.duration_minutes)
        .bind(dto.capacity)
        .bind(dto.price_cents)
        .fetch_one(db)
        .await
        .context("Failed to insert session")
        .map_err(AppError::database)?;

        Ok(session)
    }

    pub async fn get_sessions(
        db: &PgPool,
        filters: SessionFilterParams,
    ) -> Result<Vec<Session>, AppError> {
        let sessions = sqlx::query_as::<_, Session>(&format!(
            "SELECT {SESSION_COLUMNS} FROM sessions
             WHERE ($1::uuid IS NULL OR category_id = $1)
               AND ($2::uuid IS NULL OR coach_id = $2)
             ORDER BY starts_at"
        ))
        .bind(filters.category_id)
        .bind(filters.coach_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch sessions")
        .map_err(AppError::database)?;

        Ok(sessions)
    }

    pub async fn get_session(db: &PgPool, id: Uuid) -> Result<Session, AppError> {
        let session = sqlx::query_as::<_, Session>(&format!(
            "SELECT {SESSION_COLUMNS} FROM sessions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch session")
        .map_err(AppError::database)?
        .ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("Session with id {} not found", id))
        })?;

        Ok(session)
    }

    pub async fn update_session(
        db: &PgPool,
        id: Uuid,
        dto: UpdateSessionDto,
    ) -> Result<Session, AppError> {
        let session = sqlx::query_as::<_, Session>(&format!(
            "UPDATE sessions
             SET title = COALESCE($2, title),
                 description = COALESCE($3, description),
                 category_id = COALESCE($4, category_id),
                 starts_at = COALESCE($5, starts_at),
                 duration_minutes = COALESCE($6, duration_minutes),
                 capacity = COALESCE($7, capacity),
                 price_cents = COALESCE($8, price_cents),
                 updated_at = now()
             WHERE id = $1
             RETURNING {SESSION_COLUMNS}"
        ))
        .bind(id)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.category_id)
        .bind(dto.starts_at)
        .bind(dto.duration_minutes)
        .bind(dto.capacity)
        .bind(dto.price_cents)
        .fetch_optional(db)
        .await
        .context("Failed to update session")
        .map_err(AppError::database)?
        .ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("Session with id {} not found", id))
        })?;

        Ok(session)
    }

    pub async fn delete_session(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete session")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Session with id {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Books a spot for the user. The capacity check and the insert run
    /// in one transaction with the session row locked, so a full session
    /// cannot be oversubscribed by concurrent bookings.
    pub async fn book_session(
        db: &PgPool,
        session_id: Uuid,
        user_id: Uuid,
    ) -> Result<Booking, AppError> {
        let mut tx = db.begin().await.map_err(AppError::database)?;

        let capacity: i32 =
            sqlx::query_scalar("SELECT capacity FROM sessions WHERE id = $1 FOR UPDATE")
                .bind(session_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::database)?
                .ok_or_else(|| {
                    AppError::not_found(anyhow::anyhow!(
                        "Session with id {} not found",
                        session_id
                    ))
                })?;

        let booked: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM session_bookings WHERE session_id = $1")
                .bind(session_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(AppError::database)?;

        if booked >= capacity as i64 {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Session is fully booked"
            )));
        }

        let booking = sqlx::query_as::<_, Booking>(
            "INSERT INTO session_bookings (session_id, user_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING
             RETURNING session_id, user_id, booked_at",
        )
        .bind(session_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::database)?
        .ok_or_else(|| {
            AppError::bad_request(anyhow::anyhow!("You have already booked this session"))
        })?;

        tx.commit().await.map_err(AppError::database)?;

        Ok(booking)
    }

    pub async fn cancel_booking(
        db: &PgPool,
        session_id: Uuid,
        user_id: Uuid,
    ) -> Result<(), AppError> {
        let result =
            sqlx::query("DELETE FROM session_bookings WHERE session_id = $1 AND user_id = $2")
                .bind(session_id)
                .bind(user_id)
                .execute(db)
                .await
                .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "No booking found for this session"
            )));
        }

        Ok(())
    }

    pub async fn get_attendees(
        db: &PgPool,
        session_id: Uuid,
    ) -> Result<Vec<SessionAttendee>, AppError> {
        let attendees = sqlx::query_as::<_, SessionAttendee>(
            "SELECT b.user_id, u.first_name, u.last_name, u.email, b.booked_at
             FROM session_bookings b
             JOIN users u ON u.id = b.user_id
             WHERE b.session_id = $1
             ORDER BY b.booked_at",
        )
        .bind(session_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch attendees")
        .map_err(AppError::database)?;

        Ok(attendees)
    }
}
