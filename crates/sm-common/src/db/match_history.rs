use chrono::{DateTime, Utc};
use deadpool_postgres::PoolError;
use tokio_postgres::Error as PgError;
use tracing::instrument;

use crate::config::StorageSettings;
use crate::db::{score_decimal, PgPool};
use crate::run_id;

#[derive(Debug, thiserror::Error)]
pub enum MatchHistoryStorageError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

#[derive(Debug, Clone)]
pub struct MatchHistoryInsert {
    /// Identifier of the request that produced this snapshot.
    pub request_id: String,
    pub job_id: String,
    pub candidate_id: String,
    pub match_score: f64,
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert-only audit trail. Every call generates a fresh ULID key, so
/// repeated scorings of the same pair coexist as separate snapshots.
/// Returns the generated history id.
#[instrument(skip(pool, storage, record))]
pub async fn insert_match_history(
    pool: &PgPool,
    storage: &StorageSettings,
    record: &MatchHistoryInsert,
) -> Result<String, MatchHistoryStorageError> {
    let client = pool.get().await?;

    let query = format!(
        "INSERT INTO {schema}.match_history (
            history_id,
            request_id,
            job_id,
            candidate_id,
            match_score,
            created_at
        ) VALUES (
            $1, $2, $3, $4, $5, $6
        );",
        schema = storage.schema
    );
    let stmt = client.prepare(query.as_str()).await?;

    let history_id = run_id::fresh();
    let created_at = record.created_at.unwrap_or_else(Utc::now);
    client
        .execute(
            &stmt,
            &[
                &history_id,
                &record.request_id,
                &record.job_id,
                &record.candidate_id,
                &score_decimal(record.match_score),
                &created_at,
            ],
        )
        .await?;

    Ok(history_id)
}
