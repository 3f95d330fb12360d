use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// DTO for updating a user profile. All fields optional; absent fields
/// are left untouched.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    #[validate(length(min = 1))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
}
