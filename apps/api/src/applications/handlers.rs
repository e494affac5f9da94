//! Axum route handlers for screening a job's applications.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::applications::repository::{
    get_application, get_job, list_applications, update_application_status,
};
use crate::applications::screening::{
    apply_suggested_statuses, screen_applications, ApplicationScreening, ScreeningSummary,
};
use crate::errors::AppError;
use crate::models::application::{ApplicationRow, ApplicationStatus};
use crate::models::job::JobRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ApplySuggestedResponse {
    pub summary: ScreeningSummary,
    pub updated: Vec<ApplicationRow>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

async fn require_job(state: &AppState, job_id: Uuid) -> Result<JobRow, AppError> {
    get_job(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
}

async fn screen_job(state: &AppState, job: &JobRow) -> Result<ScreeningSummary, AppError> {
    let applications = list_applications(&state.db, job.id).await?;
    let results = screen_applications(
        &state.matcher,
        state.resumes.clone(),
        &job.requirements,
        &applications,
        state.config.screening_concurrency,
    )
    .await;
    Ok(ScreeningSummary::new(job.id, results))
}

/// POST /api/v1/jobs/:job_id/applications/match
///
/// Scores every application to the job. Results are returned, never stored.
pub async fn handle_match_job_applications(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<ScreeningSummary>, AppError> {
    let job = require_job(&state, job_id).await?;
    let summary = screen_job(&state, &job).await?;
    tracing::info!(
        "Screened {} applications for job {job_id}: {} scored, {} failed",
        summary.total,
        summary.scored,
        summary.failed
    );
    Ok(Json(summary))
}

/// POST /api/v1/jobs/:job_id/applications/:application_id/match
///
/// Scores one application. A resume that cannot be fetched is a 502.
pub async fn handle_match_application(
    State(state): State<AppState>,
    Path((job_id, application_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApplicationScreening>, AppError> {
    let job = require_job(&state, job_id).await?;
    let application = get_application(&state.db, job_id, application_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Application {application_id} not found for job {job_id}"
            ))
        })?;

    let resume_text = state.resumes.fetch_text(&application.resume).await?;
    let outcome = state.matcher.evaluate(&resume_text, &job.requirements);

    Ok(Json(ApplicationScreening::new(&application).with_outcome(outcome)))
}

/// POST /api/v1/jobs/:job_id/applications/apply-suggested
///
/// Scores every application and moves each scored one to its suggested status.
/// Applications whose resume could not be fetched or scored are left unchanged.
pub async fn handle_apply_suggested(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<ApplySuggestedResponse>, AppError> {
    let job = require_job(&state, job_id).await?;
    let summary = screen_job(&state, &job).await?;
    let updated = apply_suggested_statuses(&state.db, job_id, &summary.results).await?;
    Ok(Json(ApplySuggestedResponse { summary, updated }))
}

/// PATCH /api/v1/jobs/:job_id/candidates/:candidate_id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path((job_id, candidate_id)): Path<(Uuid, String)>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<ApplicationRow>, AppError> {
    let status: ApplicationStatus = request.status.parse().map_err(AppError::Validation)?;

    let row = update_application_status(&state.db, job_id, &candidate_id, status)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No application from candidate {candidate_id} for job {job_id}"
            ))
        })?;
    Ok(Json(row))
}
