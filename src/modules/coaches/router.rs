use axum::{Router, routing::get};

use crate::modules::coaches::controller::{create_coach, delete_coach, get_coach, get_coaches};
use crate::state::AppState;

pub fn init_coaches_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_coaches).post(create_coach))
        .route("/{coach_id}", get(get_coach).delete(delete_coach))
}
