use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A coach's public listing: account fields joined with coaching fields.
///
/// `id` is the coach's user id; the authorization gates compare it
/// against the `{coach_id}` route parameter.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Coach {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub specialty: String,
    pub bio: Option<String>,
    pub hourly_rate_cents: i32,
}

/// DTO for promoting an existing user to coach. Admin only.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateCoachDto {
    pub user_id: Uuid,
    #[validate(length(min = 1))]
    pub specialty: String,
    pub bio: Option<String>,
    #[validate(range(min = 0))]
    pub hourly_rate_cents: i32,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateCoachDto {
    #[validate(length(min = 1))]
    pub specialty: Option<String>,
    pub bio: Option<String>,
    #[validate(range(min = 0))]
    pub hourly_rate_cents: Option<i32>,
}
