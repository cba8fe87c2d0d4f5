use serde::{Deserialize, Serialize};

use crate::matching::explain::MatchExplanation;

/// Direction of one ranking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    JobToCandidates,
    CandidateToJobs,
}

/// Counterpart identity plus display fields; the variant follows the mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchCounterpart {
    Candidate {
        candidate_id: String,
        name: String,
        email: String,
    },
    Job {
        job_id: String,
        title: String,
        company: String,
        location: String,
        apply_url: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchItem {
    #[serde(flatten)]
    pub counterpart: MatchCounterpart,
    /// 0-100, one decimal place.
    pub match_percent: f64,
    pub confidence: String,
    pub explanation: MatchExplanation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub mode: MatchMode,
    /// Count of all gate-passing pairs, before `top_n` truncation.
    pub total_matches: usize,
    pub matches: Vec<MatchItem>,
}
