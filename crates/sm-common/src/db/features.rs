use chrono::{DateTime, Utc};
use deadpool_postgres::PoolError;
use tokio_postgres::Error as PgError;
use tracing::instrument;

use crate::config::StorageSettings;
use crate::db::{pair_key, score_decimal, PgPool};
use crate::matching::FeatureVector;

#[derive(Debug, thiserror::Error)]
pub enum FeatureStorageError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

/// Full feature vector for one scored pair.
#[derive(Debug, Clone)]
pub struct FeatureRecordInsert {
    pub job_id: String,
    pub candidate_id: String,
    pub features: FeatureVector,
    pub created_at: Option<DateTime<Utc>>,
}

/// Upsert keyed by `job_id#candidate_id`. Rescoring a pair overwrites its
/// previous feature row, keeping the store at one row per pair.
#[instrument(skip(pool, storage, record))]
pub async fn upsert_feature_record(
    pool: &PgPool,
    storage: &StorageSettings,
    record: &FeatureRecordInsert,
) -> Result<u64, FeatureStorageError> {
    let client = pool.get().await?;

    let query = format!(
        "INSERT INTO {schema}.match_features (
            pair_key,
            job_id,
            candidate_id,
            relevance_proxy,
            skill_overlap,
            title_match,
            seniority_match,
            final_score,
            created_at
        ) VALUES (
            $1, $2, $3, $4, $5, $6, $7, $8, $9
        )
        ON CONFLICT (pair_key) DO UPDATE SET
            relevance_proxy = EXCLUDED.relevance_proxy,
            skill_overlap = EXCLUDED.skill_overlap,
            title_match = EXCLUDED.title_match,
            seniority_match = EXCLUDED.seniority_match,
            final_score = EXCLUDED.final_score,
            created_at = EXCLUDED.created_at;",
        schema = storage.schema
    );
    let stmt = client.prepare(query.as_str()).await?;

    let created_at = record.created_at.unwrap_or_else(Utc::now);
    let features = &record.features;
    let rows = client
        .execute(
            &stmt,
            &[
                &pair_key(&record.job_id, &record.candidate_id),
                &record.job_id,
                &record.candidate_id,
                &score_decimal(features.relevance_proxy),
                &score_decimal(features.skill_overlap),
                &score_decimal(features.title_match),
                &score_decimal(features.seniority_match),
                &score_decimal(features.final_score),
                &created_at,
            ],
        )
        .await?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_created_at_when_missing() {
        let insert = FeatureRecordInsert {
            job_id: "j1".into(),
            candidate_id: "c1".into(),
            features: FeatureVector {
                relevance_proxy: 0.2,
                skill_overlap: 0.4,
                title_match: 0.0,
                seniority_match: 1.0,
                lexical_core: 0.24,
                final_score: 0.29,
            },
            created_at: None,
        };

        assert!(insert.created_at.is_none());
    }
}
