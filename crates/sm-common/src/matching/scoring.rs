use std::collections::HashSet;

use super::features::{self, FeatureVector};
use super::relevance::relevance_proxy;
use super::skills::skill_overlap;
use crate::config::MatchSettings;
use crate::normalize::{CandidateProfile, JobProfile};
use crate::text::{expand, tokenize};

/// Token views of one document: the raw sequence for frequency counting and
/// the synonym-expanded set for membership checks.
#[derive(Debug, Clone, Default)]
pub struct DocumentTokens {
    pub tokens: Vec<String>,
    pub expanded: HashSet<String>,
}

impl DocumentTokens {
    pub fn from_text(text: &str) -> Self {
        let tokens = tokenize(text);
        let expanded = expand(&tokens);
        Self { tokens, expanded }
    }
}

/// Job-side terms, built once per request and reused across the entire
/// counterpart collection.
#[derive(Debug, Clone, Default)]
pub struct JobTerms {
    pub body: DocumentTokens,
    pub title_tokens: Vec<String>,
}

impl JobTerms {
    pub fn from_profile(job: &JobProfile) -> Self {
        Self {
            body: DocumentTokens::from_text(&job.combined_text()),
            title_tokens: tokenize(&job.title),
        }
    }
}

pub fn candidate_tokens(candidate: &CandidateProfile) -> DocumentTokens {
    DocumentTokens::from_text(&candidate.resume_text)
}

/// Composite scorer: three short-circuiting gates, then the weighted sum.
#[derive(Debug, Clone)]
pub struct MatchScorer {
    settings: MatchSettings,
}

impl MatchScorer {
    pub fn new(settings: MatchSettings) -> Self {
        Self { settings }
    }

    /// Score one pair. `None` means a gate rejected it: no record is
    /// written and no result entry is produced for the pair.
    pub fn score_pair(&self, job: &JobTerms, candidate: &DocumentTokens) -> Option<FeatureVector> {
        let weights = self.settings.weights;

        let proxy = relevance_proxy(&job.body.tokens, &candidate.tokens);
        let skills = skill_overlap(&job.body.expanded, &candidate.expanded);
        if skills == 0.0 {
            return None;
        }

        let lexical_core = weights.relevance * proxy + weights.skills * skills;
        if lexical_core < self.settings.lexical_core_floor {
            return None;
        }

        let title = features::title_match(&job.title_tokens, &candidate.expanded);
        let seniority = features::seniority_match(&job.body.tokens, &candidate.tokens);

        let final_score = lexical_core + weights.title * title + weights.seniority * seniority;
        if final_score < self.settings.min_score {
            return None;
        }

        Some(FeatureVector {
            relevance_proxy: proxy,
            skill_overlap: skills,
            title_match: title,
            seniority_match: seniority,
            lexical_core,
            final_score,
        })
    }
}
