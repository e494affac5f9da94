use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::application::{ApplicationRow, ApplicationStatus};
use crate::models::job::JobRow;

pub async fn get_job(pool: &PgPool, job_id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(job_id)
        .fetch_optional(pool)
        .await
}

/// All applications for a job, oldest first.
pub async fn list_applications(
    pool: &PgPool,
    job_id: Uuid,
) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        "SELECT * FROM applications WHERE job_id = $1 ORDER BY created_at, id",
    )
    .bind(job_id)
    .fetch_all(pool)
    .await
}

pub async fn get_application(
    pool: &PgPool,
    job_id: Uuid,
    application_id: Uuid,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        "SELECT * FROM applications WHERE id = $1 AND job_id = $2",
    )
    .bind(application_id)
    .bind(job_id)
    .fetch_optional(pool)
    .await
}

/// Sets the status of a candidate's application to a job.
/// Returns the updated row, or `None` when the candidate has not applied.
pub async fn update_application_status(
    pool: &PgPool,
    job_id: Uuid,
    candidate_id: &str,
    status: ApplicationStatus,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    let row = sqlx::query_as::<_, ApplicationRow>(
        r#"
        UPDATE applications
        SET status = $1
        WHERE job_id = $2 AND candidate_id = $3
        RETURNING *
        "#,
    )
    .bind(status.as_str())
    .bind(job_id)
    .bind(candidate_id)
    .fetch_optional(pool)
    .await?;

    if row.is_some() {
        info!("Application of candidate {candidate_id} to job {job_id} set to '{status}'");
    }
    Ok(row)
}
