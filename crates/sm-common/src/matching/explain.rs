use serde::{Deserialize, Serialize};

use super::features::FeatureVector;

/// Human-readable reasons for one surfaced match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchExplanation {
    pub top_reason: String,
    pub secondary_reasons: Vec<String>,
}

/// Coarse confidence tier for display.
pub fn confidence_label(final_score: f64) -> &'static str {
    if final_score >= 0.6 {
        "Strong Match"
    } else if final_score >= 0.4 {
        "Good Match"
    } else {
        "Fair Match"
    }
}

/// Build the reason list in fixed priority order: skill tier, then title
/// alignment, then seniority fit, with a generic fallback when nothing
/// qualified. Works purely off the feature vector; never re-derives scores.
pub fn build_explanation(features: &FeatureVector) -> MatchExplanation {
    let mut reasons: Vec<String> = Vec::new();

    if features.skill_overlap >= 0.7 {
        reasons.push("Strong overlap with the required skills".to_string());
    } else if features.skill_overlap >= 0.4 {
        reasons.push("Moderate overlap with the required skills".to_string());
    } else if features.skill_overlap > 0.0 {
        reasons.push("Partial overlap with the required skills".to_string());
    }

    if features.title_match > 0.0 {
        reasons.push("Job title keywords appear in the profile".to_string());
    }

    if features.seniority_match > 0.0 {
        reasons.push("Seniority expectations are compatible".to_string());
    }

    if reasons.is_empty() {
        reasons.push("General text similarity with the posting".to_string());
    }

    let top_reason = reasons.remove(0);
    let secondary_reasons = reasons.into_iter().take(2).collect();

    MatchExplanation {
        top_reason,
        secondary_reasons,
    }
}
