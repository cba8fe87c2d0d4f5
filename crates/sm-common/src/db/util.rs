use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Composite key for per-pair records: `job_id#candidate_id`.
pub fn pair_key(job_id: &str, candidate_id: &str) -> String {
    format!("{job_id}#{candidate_id}")
}

/// Scores are persisted as exact decimals with four fractional digits so
/// repeated read/score/write cycles cannot accumulate float drift.
pub fn score_decimal(score: f64) -> Decimal {
    let mut value = Decimal::from_f64(score).unwrap_or_default().round_dp(4);
    value.rescale(4);
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_key_joins_with_hash() {
        assert_eq!(pair_key("j1", "c42"), "j1#c42");
    }

    #[test]
    fn scores_round_to_four_decimals() {
        assert_eq!(score_decimal(0.2619047619).to_string(), "0.2619");
        assert_eq!(score_decimal(0.3119047619).to_string(), "0.3119");
        assert_eq!(score_decimal(1.0).to_string(), "1.0000");
    }

    #[test]
    fn non_finite_scores_collapse_to_zero() {
        assert_eq!(score_decimal(f64::NAN).to_string(), "0.0000");
        assert_eq!(score_decimal(f64::INFINITY).to_string(), "0.0000");
    }
}
