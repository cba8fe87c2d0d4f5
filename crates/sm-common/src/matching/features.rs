use std::collections::HashSet;

/// Intermediate scores computed for one job-candidate pair. Exists only for
/// pairs that survived all gates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub relevance_proxy: f64,
    pub skill_overlap: f64,
    pub title_match: f64,
    pub seniority_match: f64,
    pub lexical_core: f64,
    pub final_score: f64,
}

impl FeatureVector {
    /// Display percentage: final score clamped to [0, 1], one decimal place.
    pub fn match_percent(&self) -> f64 {
        (self.final_score.clamp(0.0, 1.0) * 1000.0).round() / 10.0
    }
}

/// 1.0 when any token of the job title appears in the candidate's expanded
/// token set, else 0.0.
pub fn title_match(title_tokens: &[String], candidate_expanded: &HashSet<String>) -> f64 {
    if title_tokens
        .iter()
        .any(|token| candidate_expanded.contains(token))
    {
        1.0
    } else {
        0.0
    }
}

/// Conservative seniority mismatch detector: a "senior" posting paired with
/// a "junior" profile scores 0.0; every other combination passes. Works on
/// raw token sequences, not expanded sets.
pub fn seniority_match(job_tokens: &[String], candidate_tokens: &[String]) -> f64 {
    let senior_posting = job_tokens.iter().any(|t| t == "senior");
    let junior_profile = candidate_tokens.iter().any(|t| t == "junior");

    if senior_posting && junior_profile {
        0.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn set(tokens: &[&str]) -> HashSet<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn title_match_is_binary() {
        let title = owned(&["backend", "engineer"]);
        assert_eq!(title_match(&title, &set(&["engineer", "rust"])), 1.0);
        assert_eq!(title_match(&title, &set(&["gardener"])), 0.0);
        assert_eq!(title_match(&[], &set(&["anything"])), 0.0);
    }

    #[test]
    fn seniority_clash_requires_both_terms() {
        let senior_job = owned(&["senior", "engineer"]);
        let plain_job = owned(&["engineer"]);
        let junior_candidate = owned(&["junior", "developer"]);
        let plain_candidate = owned(&["developer"]);

        assert_eq!(seniority_match(&senior_job, &junior_candidate), 0.0);
        assert_eq!(seniority_match(&senior_job, &plain_candidate), 1.0);
        assert_eq!(seniority_match(&plain_job, &junior_candidate), 1.0);
        assert_eq!(seniority_match(&plain_job, &plain_candidate), 1.0);
    }

    #[test]
    fn match_percent_clamps_and_rounds_to_one_decimal() {
        let mut features = FeatureVector {
            relevance_proxy: 0.0,
            skill_overlap: 0.0,
            title_match: 0.0,
            seniority_match: 0.0,
            lexical_core: 0.0,
            final_score: 0.26194,
        };
        assert_eq!(features.match_percent(), 26.2);

        features.final_score = 1.2;
        assert_eq!(features.match_percent(), 100.0);
    }
}
