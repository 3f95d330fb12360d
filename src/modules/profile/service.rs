use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::profile::model::UpdateProfileDto;
use crate::modules::users::model::User;
use crate::utils::errors::AppError;

pub struct ProfileService;

impl ProfileService {
    pub async fn update_profile(
        db: &PgPool,
        user_id: Uuid,
        dto: UpdateProfileDto,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users
             SET first_name = COALESCE($2, first_name),
                 last_name = COALESCE($3, last_name),
                 email = COALESCE($4, email),
                 updated_at = now()
             WHERE id = $1
             RETURNING id, first_name, last_name, email, role, created_at, updated_at",
        )
        .bind(user_id)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .fetch_optional(db)
        .await
        .context("Failed to update profile")
        .map_err(AppError::database)?
        .ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("User with id {} not found", user_id))
        })?;

        Ok(user)
    }

    pub async fn delete_profile(db: &PgPool, user_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(db)
            .await
            .context("Failed to delete profile")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "User with id {} not found",
                user_id
            )));
        }

        Ok(())
    }
}
