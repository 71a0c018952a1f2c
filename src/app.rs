use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

/// `/problems` routes back the page's plain HTML forms; `/api` is what its JS calls.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/problems", post(handlers::submit_problem_form))
        .route("/problems/:id/delete", post(handlers::delete_problem_form))
        .route(
            "/api/problems",
            get(handlers::list_problems).post(handlers::create_problem),
        )
        .route("/api/problems/:id", delete(handlers::delete_problem))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/chart", get(handlers::get_chart))
        .with_state(state)
}
