use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/plan", get(handlers::get_plan))
        .route("/api/state", get(handlers::get_state))
        .route("/api/progress", get(handlers::get_progress))
        .route("/api/toggle", post(handlers::toggle_task))
        .route("/api/days/:id/reset", post(handlers::reset_day))
        .route("/api/week/reset", post(handlers::reset_week))
        .route("/api/tip", get(handlers::get_tip))
        .route("/api/theme", get(handlers::get_theme))
        .route("/api/theme/toggle", post(handlers::toggle_theme))
        .with_state(state)
}
