use std::cmp::Ordering;

use super::features::FeatureVector;
use super::scoring::{candidate_tokens, JobTerms, MatchScorer};
use crate::config::MatchSettings;
use crate::normalize::{CandidateProfile, JobProfile};

/// One gate-passing pair, ready for recording and projection.
#[derive(Debug, Clone)]
pub struct RankedPair {
    pub job_id: String,
    pub candidate_id: String,
    /// Identifier on the side being ranked; also the sort tiebreaker.
    pub counterpart_id: String,
    pub features: FeatureVector,
    pub match_percent: f64,
}

pub struct MatchEngine {
    scorer: MatchScorer,
}

impl MatchEngine {
    pub fn new(settings: MatchSettings) -> Self {
        Self {
            scorer: MatchScorer::new(settings),
        }
    }

    /// Score every candidate against one job. The job text is tokenized and
    /// expanded once; each candidate is tokenized fresh.
    pub fn rank_candidates_for_job(
        &self,
        job: &JobProfile,
        candidates: &[CandidateProfile],
    ) -> Vec<RankedPair> {
        let job_terms = JobTerms::from_profile(job);

        let mut ranked: Vec<RankedPair> = candidates
            .iter()
            .filter_map(|candidate| {
                let tokens = candidate_tokens(candidate);
                self.scorer
                    .score_pair(&job_terms, &tokens)
                    .map(|features| RankedPair {
                        job_id: job.job_id.clone(),
                        candidate_id: candidate.candidate_id.clone(),
                        counterpart_id: candidate.candidate_id.clone(),
                        match_percent: features.match_percent(),
                        features,
                    })
            })
            .collect();

        sort_ranked(&mut ranked);
        ranked
    }

    /// Symmetric direction: one candidate against the job collection.
    pub fn rank_jobs_for_candidate(
        &self,
        candidate: &CandidateProfile,
        jobs: &[JobProfile],
    ) -> Vec<RankedPair> {
        let tokens = candidate_tokens(candidate);

        let mut ranked: Vec<RankedPair> = jobs
            .iter()
            .filter_map(|job| {
                let job_terms = JobTerms::from_profile(job);
                self.scorer
                    .score_pair(&job_terms, &tokens)
                    .map(|features| RankedPair {
                        job_id: job.job_id.clone(),
                        candidate_id: candidate.candidate_id.clone(),
                        counterpart_id: job.job_id.clone(),
                        match_percent: features.match_percent(),
                        features,
                    })
            })
            .collect();

        sort_ranked(&mut ranked);
        ranked
    }
}

/// Descending percent; ties break by ascending counterpart id so pagination
/// stays deterministic across identical requests.
fn sort_ranked(ranked: &mut [RankedPair]) {
    ranked.sort_by(|a, b| {
        match b
            .match_percent
            .partial_cmp(&a.match_percent)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Equal => a.counterpart_id.cmp(&b.counterpart_id),
            other => other,
        }
    });
}
