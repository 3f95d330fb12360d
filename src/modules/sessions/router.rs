use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::sessions::controller::{
    book_session, cancel_booking, create_session, delete_session, get_session,
    get_session_bookings, get_sessions, update_session,
};
use crate::state::AppState;

pub fn init_sessions_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_sessions).post(create_session))
        .route(
            "/{id}",
            get(get_session).put(update_session).delete(delete_session),
        )
        .route("/{id}/book", post(book_session).delete(cancel_booking))
        .route("/{id}/bookings", get(get_session_bookings))
}
