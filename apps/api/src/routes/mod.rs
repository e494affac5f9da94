pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::applications::handlers as applications;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless matching
        .route("/api/v1/match", post(matching::handle_match))
        // Screening a job's applications
        .route(
            "/api/v1/jobs/:job_id/applications/match",
            post(applications::handle_match_job_applications),
        )
        .route(
            "/api/v1/jobs/:job_id/applications/apply-suggested",
            post(applications::handle_apply_suggested),
        )
        .route(
            "/api/v1/jobs/:job_id/applications/:application_id/match",
            post(applications::handle_match_application),
        )
        .route(
            "/api/v1/jobs/:job_id/candidates/:candidate_id/status",
            patch(applications::handle_update_status),
        )
        .with_state(state)
}
