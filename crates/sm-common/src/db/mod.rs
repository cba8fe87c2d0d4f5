pub mod candidates;
pub mod features;
pub mod jobs;
pub mod match_history;
pub mod match_live;
pub mod match_scores;
pub mod migrations;
pub mod pool;
pub mod util;

// Keep re-exports unique so downstream crates see a single symbol per helper.
pub use candidates::{fetch_candidate, list_candidates, CandidateStoreError};
pub use features::{upsert_feature_record, FeatureRecordInsert, FeatureStorageError};
pub use jobs::{fetch_job, list_jobs, JobStoreError};
pub use match_history::{insert_match_history, MatchHistoryInsert, MatchHistoryStorageError};
pub use match_live::{upsert_live_match, LiveMatchStorageError};
pub use match_scores::{upsert_match_score, MatchScoreStorageError};
pub use migrations::{run_migrations, MigrationError};
pub use pool::{create_pool_from_url, DbPoolError, PgPool};
pub use util::{pair_key, score_decimal};
