/// Composite score weights. These are fixed design constants, not learned
/// values; deployments that need different behavior override them through
/// `MatchSettings`, never in code.
pub const DEFAULT_WEIGHTS: ScoreWeights = ScoreWeights {
    relevance: 0.6,
    skills: 0.3,
    title: 0.05,
    seniority: 0.05,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Frequency-overlap relevance proxy.
    pub relevance: f64,
    /// Skill-vocabulary Jaccard overlap.
    pub skills: f64,
    /// Binary title alignment.
    pub title: f64,
    /// Binary seniority compatibility.
    pub seniority: f64,
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.relevance + self.skills + self.title + self.seniority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }
}
