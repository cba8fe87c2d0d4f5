use deadpool_postgres::PoolError;
use thiserror::Error;
use tokio_postgres::Error as PgError;
use tracing::{info, instrument};

use crate::config::StorageSettings;
use crate::db::PgPool;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("failed to run migration: {0}")]
    Postgres(#[from] PgError),
}

struct Migration {
    id: i32,
    description: &'static str,
    sql: &'static str,
}

// `{schema}` placeholders are substituted with the configured (validated)
// schema name before execution.
const MIGRATIONS: &[Migration] = &[Migration {
    id: 1,
    description: "document stores and match record tables",
    sql: r#"
CREATE TABLE IF NOT EXISTS {schema}.jobs (
    job_id TEXT PRIMARY KEY,
    title TEXT,
    description TEXT,
    company TEXT,
    location TEXT,
    apply_url TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS {schema}.candidates (
    candidate_id TEXT PRIMARY KEY,
    name TEXT,
    full_name TEXT,
    first_name TEXT,
    last_name TEXT,
    email TEXT,
    resume_text TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS {schema}.match_features (
    pair_key TEXT PRIMARY KEY,
    job_id TEXT NOT NULL,
    candidate_id TEXT NOT NULL,
    relevance_proxy NUMERIC(12, 4) NOT NULL,
    skill_overlap NUMERIC(12, 4) NOT NULL,
    title_match NUMERIC(12, 4) NOT NULL,
    seniority_match NUMERIC(12, 4) NOT NULL,
    final_score NUMERIC(12, 4) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS {schema}.match_scores (
    pair_key TEXT PRIMARY KEY,
    job_id TEXT NOT NULL,
    candidate_id TEXT NOT NULL,
    match_score NUMERIC(12, 4) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS {schema}.match_scores_live (
    job_id TEXT NOT NULL,
    candidate_id TEXT NOT NULL,
    match_score NUMERIC(12, 4) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    PRIMARY KEY (job_id, candidate_id)
);

CREATE TABLE IF NOT EXISTS {schema}.match_history (
    history_id TEXT PRIMARY KEY,
    request_id TEXT NOT NULL,
    job_id TEXT NOT NULL,
    candidate_id TEXT NOT NULL,
    match_score NUMERIC(12, 4) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_match_history_pair
    ON {schema}.match_history(job_id, candidate_id, created_at);
"#,
}];

#[instrument(skip(pool, storage))]
pub async fn run_migrations(
    pool: &PgPool,
    storage: &StorageSettings,
) -> Result<(), MigrationError> {
    let schema = storage.schema.as_str();
    let mut client = pool.get().await?;

    client
        .batch_execute(&format!(
            "CREATE SCHEMA IF NOT EXISTS {schema};
             CREATE TABLE IF NOT EXISTS {schema}.schema_migrations (
                id INTEGER PRIMARY KEY,
                description TEXT NOT NULL,
                applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
             );"
        ))
        .await?;

    for migration in MIGRATIONS {
        let already_applied: bool = client
            .query_one(
                format!(
                    "SELECT EXISTS (SELECT 1 FROM {schema}.schema_migrations WHERE id = $1)"
                )
                .as_str(),
                &[&migration.id],
            )
            .await?
            .get(0);

        if already_applied {
            continue;
        }

        let tx = client.transaction().await?;
        tx.batch_execute(&migration.sql.replace("{schema}", schema))
            .await?;
        tx.execute(
            format!("INSERT INTO {schema}.schema_migrations (id, description) VALUES ($1, $2)")
                .as_str(),
            &[&migration.id, &migration.description],
        )
        .await?;
        tx.commit().await?;

        info!(
            id = migration.id,
            description = migration.description,
            "applied migration"
        );
    }

    Ok(())
}
