//! Axum route handlers for the stateless match API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::{MatchOutcome, MatchReport};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub requirements_text: String,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub report: MatchReport,
    /// Set when the report is the fallback substituted for an internal failure.
    pub failure_reason: Option<String>,
}

impl From<MatchOutcome> for MatchResponse {
    fn from(outcome: MatchOutcome) -> Self {
        let failure_reason = outcome.failure().map(|e| e.to_string());
        if let Some(reason) = &failure_reason {
            tracing::warn!("Resume matching failed, using fallback report: {reason}");
        }
        MatchResponse {
            report: outcome.into_report(),
            failure_reason,
        }
    }
}

/// POST /api/v1/match
///
/// Scores raw resume text against raw requirement text. Empty inputs are valid.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let outcome = state
        .matcher
        .evaluate(&request.resume_text, &request.requirements_text);
    Ok(Json(outcome.into()))
}
