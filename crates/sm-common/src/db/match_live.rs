use chrono::{DateTime, Utc};
use deadpool_postgres::PoolError;
use tokio_postgres::Error as PgError;
use tracing::instrument;

use crate::config::StorageSettings;
use crate::db::{score_decimal, PgPool};

#[derive(Debug, thiserror::Error)]
pub enum LiveMatchStorageError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

/// Live record: same payload as the canonical store, keyed by the natural
/// (job_id, candidate_id) composite key for fast per-side lookups.
#[instrument(skip(pool, storage))]
pub async fn upsert_live_match(
    pool: &PgPool,
    storage: &StorageSettings,
    job_id: &str,
    candidate_id: &str,
    match_score: f64,
    created_at: DateTime<Utc>,
) -> Result<u64, LiveMatchStorageError> {
    let client = pool.get().await?;

    let query = format!(
        "INSERT INTO {schema}.match_scores_live (
            job_id,
            candidate_id,
            match_score,
            created_at
        ) VALUES (
            $1, $2, $3, $4
        )
        ON CONFLICT (job_id, candidate_id) DO UPDATE SET
            match_score = EXCLUDED.match_score,
            created_at = EXCLUDED.created_at;",
        schema = storage.schema
    );
    let stmt = client.prepare(query.as_str()).await?;

    let rows = client
        .execute(
            &stmt,
            &[
                &job_id,
                &candidate_id,
                &score_decimal(match_score),
                &created_at,
            ],
        )
        .await?;

    Ok(rows)
}
