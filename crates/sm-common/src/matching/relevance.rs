use std::collections::{HashMap, HashSet};

/// Saturation constant: repeated shared terms contribute with diminishing
/// returns through `tf*(K1+1)/(tf+K1)`.
pub const K1: f64 = 1.5;

fn term_counts(tokens: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Frequency-overlap relevance proxy between two token sequences.
///
/// For every term in the union vocabulary the shared frequency is
/// `min(count_a, count_b)`; shared terms accumulate a saturating
/// contribution, and the sum is normalized by vocabulary breadth so small,
/// tightly overlapping vocabularies outscore large sparse ones. The result
/// is a relative measure, not an absolute one.
pub fn relevance_proxy(a: &[String], b: &[String]) -> f64 {
    let counts_a = term_counts(a);
    let counts_b = term_counts(b);

    let mut vocabulary: HashSet<&str> = counts_a.keys().copied().collect();
    vocabulary.extend(counts_b.keys().copied());

    let mut accumulated = 0.0;
    for term in &vocabulary {
        let shared = counts_a
            .get(term)
            .copied()
            .unwrap_or(0)
            .min(counts_b.get(term).copied().unwrap_or(0));
        if shared > 0 {
            let tf = shared as f64;
            accumulated += tf * (K1 + 1.0) / (tf + K1);
        }
    }

    accumulated / vocabulary.len().max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn both_empty_yields_zero() {
        assert_eq!(relevance_proxy(&[], &[]), 0.0);
    }

    #[test]
    fn disjoint_sequences_yield_zero() {
        let a = owned(&["rust", "tokio"]);
        let b = owned(&["java", "spring"]);
        assert_eq!(relevance_proxy(&a, &b), 0.0);
    }

    #[test]
    fn self_similarity_dominates_disjoint_comparisons() {
        let a = owned(&["rust", "async", "network"]);
        let b = owned(&["gardening", "cooking"]);
        assert!(relevance_proxy(&a, &a) > relevance_proxy(&a, &b));
    }

    #[test]
    fn repeated_shared_terms_saturate() {
        let single = relevance_proxy(&owned(&["rust"]), &owned(&["rust"]));
        let triple = relevance_proxy(
            &owned(&["rust", "rust", "rust"]),
            &owned(&["rust", "rust", "rust"]),
        );

        // tf=1 contributes 1.0, tf=3 contributes 3*2.5/4.5 ≈ 1.67: more,
        // but far short of triple.
        assert!(triple > single);
        assert!(triple < 3.0 * single);
    }

    #[test]
    fn broad_sparse_vocabulary_scores_below_tight_overlap() {
        let tight = relevance_proxy(&owned(&["rust", "tokio"]), &owned(&["rust", "tokio"]));
        let sparse = relevance_proxy(
            &owned(&["rust", "tokio", "one", "two", "three", "four"]),
            &owned(&["rust", "tokio", "five", "six", "seven", "eight"]),
        );
        assert!(tight > sparse);
    }
}
