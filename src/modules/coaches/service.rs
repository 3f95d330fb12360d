use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::coaches::model::{Coach, CreateCoachDto, UpdateCoachDto};
use crate::utils::errors::AppError;

const COACH_SELECT: &str = "SELECT u.id, u.first_name, u.last_name, u.email,
        c.specialty, c.bio, c.hourly_rate_cents
 FROM coaches c JOIN users u ON u.id = c.user_id";

pub struct CoachService;

impl CoachService {
    /// Promotes a user to coach: flips the role and inserts the coaching
    /// record in one transaction.
    pub async fn create_coach(db: &PgPool, dto: CreateCoachDto) -> Result<Coach, AppError> {
        let mut tx = db.begin().await.map_err(AppError::database)?;

        let updated = sqlx::query("UPDATE users SET role = 'coach', updated_at = now() WHERE id = $1")
            .bind(dto.user_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?;

        if updated.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "User with id {} not found",
                dto.user_id
            )));
        }

        sqlx::query(
            "INSERT INTO coaches (user_id, specialty, bio, hourly_rate_cents)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (user_id) DO UPDATE
             SET specialty = $2, bio = $3, hourly_rate_cents = $4, updated_at = now()",
        )
        .bind(dto.user_id)
        .bind(&dto.specialty)
        .bind(&dto.bio)
        .bind(dto.hourly_rate_cents)
        .execute(&mut *tx)
        .await
        .context("Failed to insert coach")
        .map_err(AppError::database)?;

        tx.commit().await.map_err(AppError::database)?;

        Self::get_coach(db, dto.user_id).await
    }

    pub async fn get_coaches(db: &PgPool) -> Result<Vec<Coach>, AppError> {
        let coaches =
            sqlx::query_as::<_, Coach>(&format!("{COACH_SELECT} ORDER BY u.last_name"))
                .fetch_all(db)
                .await
                .context("Failed to fetch coaches")
                .map_err(AppError::database)?;

        Ok(coaches)
    }

    pub async fn get_coach(db: &PgPool, coach_id: Uuid) -> Result<Coach, AppError> {
        let coach = sqlx::query_as::<_, Coach>(&format!("{COACH_SELECT} WHERE u.id = $1"))
            .bind(coach_id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch coach")
            .map_err(AppError::database)?
            .ok_or_else(|| {
                AppError::not_found(anyhow::anyhow!("Coach with id {} not found", coach_id))
            })?;

        Ok(coach)
    }

    pub async fn update_coach(
        db: &PgPool,
        coach_id: Uuid,
        dto: UpdateCoachDto,
    ) -> Result<Coach, AppError> {
        let updated = sqlx::query(
            "UPDATE coaches
             SET specialty = COALESCE($2, specialty),
                 bio = COALESCE($3, bio),
                 hourly_rate_cents = COALESCE($4, hourly_rate_cents),
                 updated_at = now()
             WHERE user_id = $1",
        )
        .bind(coach_id)
        .bind(&dto.specialty)
        .bind(&dto.bio)
        .bind(dto.hourly_rate_cents)
        .execute(db)
        .await
        .context("Failed to update coach")
        .map_err(AppError::database)?;

        if updated.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Coach with id {} not found",
                coach_id
            )));
        }

        Self::get_coach(db, coach_id).await
    }

    /// Removes the coaching record and demotes the account back to `user`.
    pub async fn delete_coach(db: &PgPool, coach_id: Uuid) -> Result<(), AppError> {
        let mut tx = db.begin().await.map_err(AppError::database)?;

        let deleted = sqlx::query("DELETE FROM coaches WHERE user_id = $1")
            .bind(coach_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?;

        if deleted.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Coach with id {} not found",
                coach_id
            )));
        }

        sqlx::query("UPDATE users SET role = 'user', updated_at = now() WHERE id = $1")
            .bind(coach_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::database)?;

        tx.commit().await.map_err(AppError::database)?;

        Ok(())
    }
}
