//! Session entities, booking records, and session DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// A bookable training session run by one coach in one category.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Session {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category_id: Uuid,
    pub coach_id: Uuid,
    pub starts_at: chrono::DateTime<chrono::Utc>,
    pub duration_minutes: i32,
    pub capacity: i32,
    pub price_cents: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// One user's spot in a session.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Booking {
    pub session_id: Uuid,
    pub user_id: Uuid,
    pub booked_at: chrono::DateTime<chrono::Utc>,
}

/// Booking joined with the attendee's account fields, for coach views.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct SessionAttendee {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub booked_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateSessionDto {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    pub category_id: Uuid,
    /// The coach running the session. Non-admin callers may only use
    /// their own id here.
    pub coach_id: Uuid,
    pub starts_at: chrono::DateTime<chrono::Utc>,
    #[validate(range(min = 1))]
    pub duration_minutes: i32,
    #[validate(range(min = 1))]
    pub capacity: i32,
    #[validate(range(min = 0))]
    pub price_cents: i32,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateSessionDto {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub starts_at: Option<chrono::DateTime<chrono::Utc>>,
    #[validate(range(min = 1))]
    pub duration_minutes: Option<i32>,
    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
    #[validate(range(min = 0))]
    pub price_cents: Option<i32>,
}

/// Query filters for the session listing.
#[derive(Deserialize, Debug, Clone, Default, Validate, IntoParams, ToSchema)]
pub struct SessionFilterParams {
    pub category_id: Option<Uuid>,
    pub coach_id: Option<Uuid>,
}
