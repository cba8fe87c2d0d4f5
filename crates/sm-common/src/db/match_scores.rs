use chrono::{DateTime, Utc};
use deadpool_postgres::PoolError;
use tokio_postgres::Error as PgError;
use tracing::instrument;

use crate::config::StorageSettings;
use crate::db::{pair_key, score_decimal, PgPool};

#[derive(Debug, thiserror::Error)]
pub enum MatchScoreStorageError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

/// Canonical record: current best known score for a pair, upserted on the
/// `job_id#candidate_id` key.
#[instrument(skip(pool, storage))]
pub async fn upsert_match_score(
    pool: &PgPool,
    storage: &StorageSettings,
    job_id: &str,
    candidate_id: &str,
    match_score: f64,
    created_at: DateTime<Utc>,
) -> Result<u64, MatchScoreStorageError> {
    let client = pool.get().await?;

    let query = format!(
        "INSERT INTO {schema}.match_scores (
            pair_key,
            job_id,
            candidate_id,
            match_score,
            created_at
        ) VALUES (
            $1, $2, $3, $4, $5
        )
        ON CONFLICT (pair_key) DO UPDATE SET
            match_score = EXCLUDED.match_score,
            created_at = EXCLUDED.created_at;",
        schema = storage.schema
    );
    let stmt = client.prepare(query.as_str()).await?;

    let rows = client
        .execute(
            &stmt,
            &[
                &pair_key(job_id, candidate_id),
                &job_id,
                &candidate_id,
                &score_decimal(match_score),
                &created_at,
            ],
        )
        .await?;

    Ok(rows)
}
