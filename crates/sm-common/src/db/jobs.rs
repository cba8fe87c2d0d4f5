use deadpool_postgres::PoolError;
use tokio_postgres::{Error as PgError, Row};
use tracing::instrument;

use crate::config::StorageSettings;
use crate::db::PgPool;
use crate::Job;

#[derive(Debug, thiserror::Error)]
pub enum JobStoreError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

const JOB_COLUMNS: &str = "job_id, title, description, company, location, apply_url";

fn job_from_row(row: &Row) -> Job {
    Job {
        job_id: row.get("job_id"),
        title: row.get("title"),
        description: row.get("description"),
        company: row.get("company"),
        location: row.get("location"),
        apply_url: row.get("apply_url"),
    }
}

/// Point lookup by identifier.
#[instrument(skip(pool, storage))]
pub async fn fetch_job(
    pool: &PgPool,
    storage: &StorageSettings,
    job_id: &str,
) -> Result<Option<Job>, JobStoreError> {
    let client = pool.get().await?;
    let query = format!(
        "SELECT {JOB_COLUMNS} FROM {}.jobs WHERE job_id = $1",
        storage.schema
    );

    let row = client.query_opt(query.as_str(), &[&job_id]).await?;
    Ok(row.as_ref().map(job_from_row))
}

/// Full-collection scan. The matching core ranks against the entire
/// counterpart collection; an indexed retrieval only needs to replace this
/// function, not the scoring pipeline.
#[instrument(skip(pool, storage))]
pub async fn list_jobs(pool: &PgPool, storage: &StorageSettings) -> Result<Vec<Job>, JobStoreError> {
    let client = pool.get().await?;
    let query = format!(
        "SELECT {JOB_COLUMNS} FROM {}.jobs ORDER BY job_id",
        storage.schema
    );

    let rows = client.query(query.as_str(), &[]).await?;
    Ok(rows.iter().map(job_from_row).collect())
}
