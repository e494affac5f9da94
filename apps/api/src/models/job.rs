use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub recruiter_id: String,
    pub title: String,
    /// Free-text requirements the matcher scores resumes against.
    pub requirements: String,
    pub is_open: bool,
    pub created_at: DateTime<Utc>,
}
