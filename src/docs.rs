use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, RegisterRequestDto};
use crate::modules::categories::model::{Category, CreateCategoryDto, UpdateCategoryDto};
use crate::modules::coaches::model::{Coach, CreateCoachDto, UpdateCoachDto};
use crate::modules::profile::model::UpdateProfileDto;
use crate::modules::sessions::model::{
    Booking, CreateSessionDto, Session, SessionAttendee, SessionFilterParams, UpdateSessionDto,
};
use crate::modules::users::model::{User, UserRole};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::profile::controller::get_user_profile,
        crate::modules::profile::controller::update_user_profile,
        crate::modules::profile::controller::delete_user_profile,
        crate::modules::profile::controller::get_coach_profile,
        crate::modules::profile::controller::update_coach_profile,
        crate::modules::profile::controller::delete_coach_profile,
        crate::modules::coaches::controller::get_coaches,
        crate::modules::coaches::controller::get_coach,
        crate::modules::coaches::controller::create_coach,
        crate::modules::coaches::controller::delete_coach,
        crate::modules::categories::controller::get_categories,
        crate::modules::categories::controller::get_category,
        crate::modules::categories::controller::create_category,
        crate::modules::categories::controller::update_category,
        crate::modules::categories::controller::delete_category,
        crate::modules::sessions::controller::get_sessions,
        crate::modules::sessions::controller::get_session,
        crate::modules::sessions::controller::create_session,
        crate::modules::sessions::controller::update_session,
        crate::modules::sessions::controller::delete_session,
        crate::modules::sessions::controller::book_session,
        crate::modules::sessions::controller::cancel_booking,
        crate::modules::sessions::controller::get_session_bookings,
    ),
    components(
        schemas(
            User,
            UserRole,
            LoginRequest,
            LoginResponse,
            RegisterRequestDto,
            UpdateProfileDto,
            Coach,
            CreateCoachDto,
            UpdateCoachDto,
            Category,
            CreateCategoryDto,
            UpdateCategoryDto,
            Session,
            SessionFilterParams,
            CreateSessionDto,
            UpdateSessionDto,
            Booking,
            SessionAttendee,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User authentication endpoints"),
        (name = "Users", description = "User administration endpoints"),
        (name = "Profile", description = "User and coach profile management"),
        (name = "Coaches", description = "Coach directory and administration"),
        (name = "Categories", description = "Sports category management"),
        (name = "Sessions", description = "Session management and booking")
    ),
    info(
        title = "Courtside API",
        version = "0.1.0",
        description = "A REST API for booking sports sessions, built with Rust, Axum, and PostgreSQL, featuring JWT-based authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
