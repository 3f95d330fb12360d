use axum::{Router, middleware, routing::get};

use crate::middleware::role::require_profile_owner;
use crate::modules::profile::controller::{
    delete_coach_profile, delete_user_profile, get_coach_profile, get_user_profile,
    update_coach_profile, update_user_profile,
};
use crate::state::AppState;

pub fn init_profile_router(state: AppState) -> Router<AppState> {
    let user_routes = Router::new()
        .route(
            "/user/{user_id}",
            get(get_user_profile)
                .put(update_user_profile)
                .delete(delete_user_profile),
        )
        .route_layer(middleware::from_fn_with_state(state, require_profile_owner));

    Router::new().merge(user_routes).route(
        "/coach/{coach_id}",
        get(get_coach_profile)
            .put(update_coach_profile)
            .delete(delete_coach_profile),
    )
}
