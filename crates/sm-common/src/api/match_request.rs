use serde::Deserialize;

/// Query parameters for the match endpoint.
///
/// Supplying `job_id` ranks candidates for that job; otherwise
/// `candidate_id` ranks jobs for that candidate. Both absent is a request
/// error. `top_n` caps the returned list without affecting the reported
/// total.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchQuery {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub candidate_id: Option<String>,
    #[serde(default)]
    pub top_n: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_query_style_json() {
        let query: MatchQuery =
            serde_json::from_str(r#"{"job_id": "j1", "top_n": 3}"#).unwrap();
        assert_eq!(query.job_id.as_deref(), Some("j1"));
        assert_eq!(query.candidate_id, None);
        assert_eq!(query.top_n, Some(3));
    }

    #[test]
    fn all_fields_default_to_absent() {
        let query: MatchQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.job_id, None);
        assert_eq!(query.candidate_id, None);
        assert_eq!(query.top_n, None);
    }

    #[test]
    fn negative_top_n_is_rejected() {
        assert!(serde_json::from_str::<MatchQuery>(r#"{"top_n": -1}"#).is_err());
    }
}
