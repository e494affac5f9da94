//! Batch screening: scores every application to a job against its requirements.
//!
//! Resume downloads run concurrently (bounded by a semaphore); matching itself
//! is pure and runs inline in application order. One failed download never
//! aborts the batch: it is recorded on that application's entry.

use std::sync::Arc;

use serde::Serialize;
use sqlx::PgPool;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::applications::repository::update_application_status;
use crate::matching::{MatchOutcome, MatchReport, ResumeMatcher};
use crate::models::application::{ApplicationRow, ApplicationStatus};
use crate::resume_store::ResumeStore;

/// Screening result for a single application.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationScreening {
    pub application_id: Uuid,
    pub candidate_id: String,
    pub name: Option<String>,
    pub current_status: String,
    /// `None` only when the resume could not be fetched.
    pub report: Option<MatchReport>,
    /// Set when `report` is the fallback for an internal matcher failure.
    pub failure_reason: Option<String>,
    pub fetch_error: Option<String>,
}

impl ApplicationScreening {
    pub fn new(application: &ApplicationRow) -> Self {
        Self {
            application_id: application.id,
            candidate_id: application.candidate_id.clone(),
            name: application.name.clone(),
            current_status: application.status.clone(),
            report: None,
            failure_reason: None,
            fetch_error: None,
        }
    }

    pub fn with_outcome(mut self, outcome: MatchOutcome) -> Self {
        self.failure_reason = outcome.failure().map(|e| e.to_string());
        self.report = Some(outcome.into_report());
        self
    }

    fn with_fetch_error(mut self, message: String) -> Self {
        self.fetch_error = Some(message);
        self
    }

    /// A genuine score: resume fetched and matcher succeeded.
    pub fn is_scored(&self) -> bool {
        self.report.is_some() && self.failure_reason.is_none() && self.fetch_error.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreeningSummary {
    pub job_id: Uuid,
    pub total: usize,
    pub scored: usize,
    pub failed: usize,
    pub results: Vec<ApplicationScreening>,
}

impl ScreeningSummary {
    pub fn new(job_id: Uuid, results: Vec<ApplicationScreening>) -> Self {
        let scored = results.iter().filter(|r| r.is_scored()).count();
        Self {
            job_id,
            total: results.len(),
            scored,
            failed: results.len() - scored,
            results,
        }
    }
}

/// Fetches and scores each application's resume. Output order matches input order.
pub async fn screen_applications(
    matcher: &ResumeMatcher,
    store: Arc<dyn ResumeStore>,
    requirements: &str,
    applications: &[ApplicationRow],
    concurrency: usize,
) -> Vec<ApplicationScreening> {
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = JoinSet::new();

    for (index, application) in applications.iter().enumerate() {
        let store = Arc::clone(&store);
        let semaphore = Arc::clone(&semaphore);
        let location = application.resume.clone();
        tasks.spawn(async move {
            let _permit = semaphore.acquire_owned().await;
            (index, store.fetch_text(&location).await)
        });
    }

    let mut texts: Vec<Option<Result<String, String>>> = vec![None; applications.len()];
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, result)) => texts[index] = Some(result.map_err(|e| e.to_string())),
            Err(e) => error!("Resume fetch task failed: {e}"),
        }
    }

    applications
        .iter()
        .zip(texts)
        .map(|(application, text)| {
            let screening = ApplicationScreening::new(application);
            match text {
                Some(Ok(resume_text)) => {
                    screening.with_outcome(matcher.evaluate(&resume_text, requirements))
                }
                Some(Err(message)) => {
                    warn!(
                        "Could not fetch resume for application {}: {message}",
                        application.id
                    );
                    screening.with_fetch_error(message)
                }
                None => screening.with_fetch_error("resume fetch did not complete".to_string()),
            }
        })
        .collect()
}

/// Status each genuinely scored application should move to, keyed by candidate.
pub fn plan_status_changes(results: &[ApplicationScreening]) -> Vec<(String, ApplicationStatus)> {
    results
        .iter()
        .filter(|r| r.is_scored())
        .filter_map(|r| {
            r.report
                .as_ref()
                .map(|report| (r.candidate_id.clone(), report.suggested_status.into()))
        })
        .collect()
}

/// Writes each scored application's suggested status. Returns the updated rows.
pub async fn apply_suggested_statuses(
    pool: &PgPool,
    job_id: Uuid,
    results: &[ApplicationScreening],
) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    let changes = plan_status_changes(results);
    let mut updated = Vec::with_capacity(changes.len());

    for (candidate_id, status) in changes {
        if let Some(row) = update_application_status(pool, job_id, &candidate_id, status).await? {
            updated.push(row);
        }
    }

    info!(
        "Applied suggested statuses for job {job_id}: {} of {} applications updated",
        updated.len(),
        results.len()
    );
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::config::overflowing_education_config;
    use crate::matching::{MatchConfig, SuggestedStatus};
    use crate::resume_store::testing::InMemoryResumeStore;
    use chrono::Utc;

    const REQUIREMENTS: &str = "3 years experience, bachelor degree, javascript, react";

    fn application(candidate: &str, resume: &str) -> ApplicationRow {
        ApplicationRow {
            id: Uuid::new_v4(),
            job_id: Uuid::new_v4(),
            candidate_id: candidate.to_string(),
            name: Some(candidate.to_uppercase()),
            status: "applied".to_string(),
            resume: resume.to_string(),
            created_at: Utc::now(),
        }
    }

    fn matcher() -> ResumeMatcher {
        ResumeMatcher::new(MatchConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_screening_preserves_order_and_isolates_failures() {
        let store = InMemoryResumeStore::default()
            .with(
                "https://x/a.txt",
                "5 years experience, bachelor degree, javascript, react",
            )
            .with("https://x/c.txt", "python, django");
        let apps = vec![
            application("a", "https://x/a.txt"),
            application("b", "https://x/missing.txt"),
            application("c", "https://x/c.txt"),
        ];

        let results = screen_applications(&matcher(), Arc::new(store), REQUIREMENTS, &apps, 2).await;

        assert_eq!(results.len(), 3);
        let ids: Vec<_> = results.iter().map(|r| r.candidate_id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);

        // "3 years experience" is not a substring either way of "5 years experience": 3/4 skills.
        let a = results[0].report.as_ref().unwrap();
        assert_eq!(a.missing_skills, ["3 years experience"]);
        assert_eq!(a.score, 85.0);
        assert_eq!(a.suggested_status, SuggestedStatus::Hired);

        assert!(results[1].report.is_none());
        assert!(results[1].fetch_error.as_deref().unwrap().contains("404"));

        let c = results[2].report.as_ref().unwrap();
        assert_eq!(c.suggested_status, SuggestedStatus::Rejected);
    }

    #[tokio::test]
    async fn test_concurrency_of_zero_still_progresses() {
        let store = InMemoryResumeStore::default().with("https://x/a.txt", "react");
        let apps = vec![application("a", "https://x/a.txt")];
        let results = screen_applications(&matcher(), Arc::new(store), "react", &apps, 0).await;
        assert!(results[0].is_scored());
    }

    #[tokio::test]
    async fn test_huge_year_count_is_scored() {
        let resume = format!("{} years experience, bachelor, javascript, react", "9".repeat(30));
        let store = InMemoryResumeStore::default().with("https://x/a.txt", &resume);
        let apps = vec![application("a", "https://x/a.txt")];

        let results =
            screen_applications(&matcher(), Arc::new(store), REQUIREMENTS, &apps, 4).await;

        assert!(results[0].is_scored());
        let report = results[0].report.as_ref().unwrap();
        assert_eq!(report.experience_match, 100.0);
        assert_eq!(report.suggested_status, SuggestedStatus::Hired);
    }

    #[tokio::test]
    async fn test_matcher_failure_is_reported_not_scored() {
        let failing = ResumeMatcher::new(overflowing_education_config()).unwrap();
        let store = InMemoryResumeStore::default().with("https://x/a.txt", "phd, react");
        let apps = vec![application("a", "https://x/a.txt")];

        let results =
            screen_applications(&failing, Arc::new(store), "bachelor, react", &apps, 4).await;

        assert!(!results[0].is_scored());
        assert!(results[0].failure_reason.as_deref().unwrap().contains("finite"));
        assert_eq!(results[0].report, Some(MatchReport::fallback()));
        assert!(plan_status_changes(&results).is_empty());
    }

    #[tokio::test]
    async fn test_summary_counts_and_status_plan() {
        let store = InMemoryResumeStore::default()
            .with("https://x/a.txt", "5 years experience, bachelor, javascript, react")
            .with("https://x/c.txt", "javascript, react");
        let apps = vec![
            application("a", "https://x/a.txt"),
            application("b", "https://x/missing.txt"),
            application("c", "https://x/c.txt"),
        ];
        let results = screen_applications(&matcher(), Arc::new(store), REQUIREMENTS, &apps, 8).await;
        let plan = plan_status_changes(&results);
        let summary = ScreeningSummary::new(Uuid::new_v4(), results);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.scored, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(
            plan,
            vec![
                ("a".to_string(), ApplicationStatus::Hired),
                ("c".to_string(), ApplicationStatus::Interviewing),
            ]
        );
    }
}
