/// Stopword list, kept sorted so membership checks can binary search.
const STOPWORDS: &[&str] = &[
    "a", "about", "after", "all", "an", "and", "any", "are", "as", "at", "be", "been", "but",
    "by", "can", "could", "did", "do", "does", "for", "from", "had", "has", "have", "he", "her",
    "his", "how", "i", "if", "in", "into", "is", "it", "its", "just", "me", "more", "most", "my",
    "no", "not", "of", "on", "or", "our", "out", "over", "she", "so", "some", "than", "that",
    "the", "their", "them", "then", "there", "these", "they", "this", "to", "under", "up", "us",
    "was", "we", "were", "what", "when", "which", "who", "will", "with", "would", "you", "your",
];

fn is_stopword(token: &str) -> bool {
    STOPWORDS.binary_search(&token).is_ok()
}

/// Split text into lowercase alphabetic tokens with stopwords removed.
///
/// Tokens are maximal `[a-zA-Z]+` runs; digits and punctuation act as
/// separators. First-occurrence order is preserved so repeated calls on the
/// same input produce identical sequences.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut run = String::new();

    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            run.push(ch.to_ascii_lowercase());
        } else if !run.is_empty() {
            if is_stopword(&run) {
                run.clear();
            } else {
                tokens.push(std::mem::take(&mut run));
            }
        }
    }

    if !run.is_empty() && !is_stopword(&run) {
        tokens.push(run);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopword_list_is_sorted() {
        assert!(STOPWORDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn splits_on_non_alphabetic_and_lowercases() {
        assert_eq!(
            tokenize("Senior Backend-Engineer (AWS/Docker, 5yrs)"),
            vec!["senior", "backend", "engineer", "aws", "docker", "yrs"]
        );
    }

    #[test]
    fn removes_stopwords() {
        assert_eq!(
            tokenize("experience with the cloud and APIs"),
            vec!["experience", "cloud", "apis"]
        );
    }

    #[test]
    fn empty_and_symbol_only_input_yields_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("123 --- !!!").is_empty());
    }

    #[test]
    fn tokenizing_twice_is_deterministic() {
        let text = "Rust developer, Rust tooling, distributed systems";
        assert_eq!(tokenize(text), tokenize(text));
    }

    #[test]
    fn output_is_lowercase_alphabetic_and_stopword_free() {
        for token in tokenize("The QUICK brown-fox2 jumped OVER 42 lazy_dogs!") {
            assert!(token.chars().all(|c| c.is_ascii_lowercase()));
            assert!(!is_stopword(&token));
        }
    }
}
