use axum::{
    extract::{Query, State},
    Json,
};

use sm_common::api::match_request::MatchQuery;
use sm_common::api::match_response::MatchOutcome;
use sm_common::matching::service;
use sm_common::run_id;

use crate::error::{current_request_id, ApiError};
use crate::SharedState;

/// Bidirectional match endpoint: `job_id` ranks candidates for a job,
/// `candidate_id` ranks jobs for a candidate.
pub async fn run_match(
    State(state): State<SharedState>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<MatchOutcome>, ApiError> {
    let request_id = current_request_id().unwrap_or_else(run_id::fresh);

    let outcome = service::run_match(
        &state.pool,
        &state.settings,
        &state.storage,
        &query,
        &request_id,
    )
    .await?;

    Ok(Json(outcome))
}
