use deadpool_postgres::PoolError;
use tokio_postgres::{Error as PgError, Row};
use tracing::instrument;

use crate::config::StorageSettings;
use crate::db::PgPool;
use crate::Candidate;

#[derive(Debug, thiserror::Error)]
pub enum CandidateStoreError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

const CANDIDATE_COLUMNS: &str =
    "candidate_id, name, full_name, first_name, last_name, email, resume_text";

fn candidate_from_row(row: &Row) -> Candidate {
    Candidate {
        candidate_id: row.get("candidate_id"),
        name: row.get("name"),
        full_name: row.get("full_name"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        email: row.get("email"),
        resume_text: row.get("resume_text"),
    }
}

/// Point lookup by identifier.
#[instrument(skip(pool, storage))]
pub async fn fetch_candidate(
    pool: &PgPool,
    storage: &StorageSettings,
    candidate_id: &str,
) -> Result<Option<Candidate>, CandidateStoreError> {
    let client = pool.get().await?;
    let query = format!(
        "SELECT {CANDIDATE_COLUMNS} FROM {}.candidates WHERE candidate_id = $1",
        storage.schema
    );

    let row = client.query_opt(query.as_str(), &[&candidate_id]).await?;
    Ok(row.as_ref().map(candidate_from_row))
}

/// Full-collection scan, mirror of `jobs::list_jobs`.
#[instrument(skip(pool, storage))]
pub async fn list_candidates(
    pool: &PgPool,
    storage: &StorageSettings,
) -> Result<Vec<Candidate>, CandidateStoreError> {
    let client = pool.get().await?;
    let query = format!(
        "SELECT {CANDIDATE_COLUMNS} FROM {}.candidates ORDER BY candidate_id",
        storage.schema
    );

    let rows = client.query(query.as_str(), &[]).await?;
    Ok(rows.iter().map(candidate_from_row).collect())
}
