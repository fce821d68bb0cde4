use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/auth/login", post(handlers::login))
        .route("/auth/register", post(handlers::register))
        .route("/auth/logout", post(handlers::logout))
        .route("/dashboard", get(handlers::dashboard))
        .route("/habits", post(handlers::create_habit))
        .route("/habits/:id/delete", post(handlers::delete_habit))
        .route("/calendar/toggle", post(handlers::toggle_check))
        .route("/api/habits", get(handlers::get_habits))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/calendar", get(handlers::get_calendar))
        .fallback(handlers::not_found)
        .with_state(state)
}
