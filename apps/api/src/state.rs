use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::matching::ResumeMatcher;
use crate::resume_store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Scoring constants are fixed at startup; the matcher is shared read-only.
    pub matcher: Arc<ResumeMatcher>,
    /// Resume retrieval (Redis-cached HTTP/S3 in production).
    pub resumes: Arc<dyn ResumeStore>,
}
