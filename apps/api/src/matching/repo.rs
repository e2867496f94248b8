use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::job::JobRow;

/// Fetches the job rows for the given candidate ids.
///
/// Ids with no row simply do not appear in the result; partial results are
/// not an error.
pub async fn fetch_jobs_by_ids(pool: &PgPool, ids: &[i32]) -> Result<Vec<JobRow>, AppError> {
    let jobs = sqlx::query_as::<_, JobRow>(r#"SELECT * FROM "Job" WHERE id = ANY($1)"#)
        .bind(ids)
        .fetch_all(pool)
        .await?;
    Ok(jobs)
}
