use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, patch, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/packs", get(handlers::get_packs))
        .route("/api/targets", get(handlers::get_targets))
        .route("/api/phrases", post(handlers::create_phrase))
        .route(
            "/api/phrases/:id",
            patch(handlers::update_phrase).delete(handlers::delete_phrase),
        )
        .route("/api/session", get(handlers::get_session))
        .route("/api/session/increment", post(handlers::tap))
        .route("/api/session/reset", post(handlers::reset_session))
        .route("/api/session/target", post(handlers::set_target))
        .route("/api/session/phrase", post(handlers::select_phrase))
        .route(
            "/api/history",
            get(handlers::get_history).delete(handlers::clear_history),
        )
        .route("/api/stats", get(handlers::get_stats))
        .with_state(state)
}
