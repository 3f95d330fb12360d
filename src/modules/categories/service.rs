use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::modules::categories::model::{Category, CreateCategoryDto, UpdateCategoryDto};
use crate::utils::errors::AppError;

pub struct CategoryService;

impl CategoryService {
    pub async fn create_category(
        db: &PgPool,
        dto: CreateCategoryDto,
    ) -> Result<Category, AppError> {
        let existing: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM categories WHERE name = $1")
                .bind(&dto.name)
                .fetch_optional(db)
                .await
                .map_err(AppError::database)?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Category '{}' already exists",
                dto.name
            )));
        }

        let category = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name, description)
             VALUES ($1, $2)
             RETURNING id, name, description, created_at, updated_at",
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .fetch_one(db)
        .await
        .context("Failed to insert category")
        .map_err(AppError::database)?;

        Ok(category)
    }

    pub async fn get_categories(db: &PgPool) -> Result<Vec<Category>, AppError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, description, created_at, updated_at FROM categories ORDER BY name",
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch categories")
        .map_err(AppError::database)?;

        Ok(categories)
    }

    pub async fn get_category(db: &PgPool, id: Uuid) -> Result<Category, AppError> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name, description, created_at, updated_at FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch category")
        .map_err(AppError::database)?
        .ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("Category with id {} not found", id))
        })?;

        Ok(category)
    }

    pub async fn update_category(
        db: &PgPool,
        id: Uuid,
        dto: UpdateCategoryDto,
    ) -> Result<Category, AppError> {
        let category = sqlx::query_as::<_, Category>(
            "UPDATE categories
             SET name = COALESCE($2, name),
                 description = COALESCE($3, description),
                 updated_at = now()
             WHERE id = $1
             RETURNING id, name, description, created_at, updated_at",
        )
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.description)
        .fetch_optional(db)
        .await
        .context("Failed to update category")
        .map_err(AppError::database)?
        .ok_or_else(|| {
            AppError::not_found(anyhow::anyhow!("Category with id {} not found", id))
        })?;

        Ok(category)
    }

    pub async fn delete_category(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete category")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Category with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
