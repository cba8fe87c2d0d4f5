use crate::matching::weights::{ScoreWeights, DEFAULT_WEIGHTS};

/// Scoring and ranking configuration.
///
/// Built once at startup and handed to the engine; nothing in the scoring
/// core reads the process environment after construction.
#[derive(Debug, Clone)]
pub struct MatchSettings {
    /// Final-score cutoff below which a pair is rejected outright.
    pub min_score: f64,
    /// Result list size when the request does not supply `top_n`.
    pub default_top_n: usize,
    /// Cutoff applied to the proxy + skill core before the cheap binary
    /// features are even computed.
    pub lexical_core_floor: f64,
    pub weights: ScoreWeights,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            min_score: 0.25,
            default_top_n: 5,
            lexical_core_floor: 0.15,
            weights: DEFAULT_WEIGHTS,
        }
    }
}

impl MatchSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            min_score: env_f64("SM_MIN_SCORE").unwrap_or(defaults.min_score),
            default_top_n: env_usize("SM_DEFAULT_TOP_N").unwrap_or(defaults.default_top_n),
            lexical_core_floor: env_f64("SM_LEXICAL_CORE_FLOOR")
                .unwrap_or(defaults.lexical_core_floor),
            weights: defaults.weights,
        }
    }
}

/// Naming for the persistence layer. The schema is interpolated into SQL
/// text, so anything that is not a plain lowercase identifier falls back to
/// the default.
#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub schema: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            schema: "staffing".to_string(),
        }
    }
}

impl StorageSettings {
    pub fn from_env() -> Self {
        let schema = std::env::var("SM_DB_SCHEMA")
            .ok()
            .filter(|raw| is_plain_identifier(raw))
            .unwrap_or_else(|| Self::default().schema);
        Self { schema }
    }
}

fn is_plain_identifier(raw: &str) -> bool {
    !raw.is_empty()
        && raw
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '_')
}

fn env_f64(name: &str) -> Option<f64> {
    std::env::var(name).ok().and_then(|s| s.parse().ok())
}

fn env_usize(name: &str) -> Option<usize> {
    std::env::var(name).ok().and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_design_constants() {
        let settings = MatchSettings::default();
        assert_eq!(settings.min_score, 0.25);
        assert_eq!(settings.default_top_n, 5);
        assert_eq!(settings.lexical_core_floor, 0.15);
    }

    #[test]
    fn schema_must_be_a_plain_identifier() {
        assert!(is_plain_identifier("staffing"));
        assert!(is_plain_identifier("match_store"));
        assert!(!is_plain_identifier(""));
        assert!(!is_plain_identifier("staffing; DROP TABLE jobs"));
        assert!(!is_plain_identifier("Staffing"));
    }
}
