use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// Domain synonym table. Keys and values are post-tokenizer terms (lowercase,
/// alphabetic) so lookups run directly against tokenizer output. Expansion is
/// one level deep: mapped values are never re-expanded.
static SYNONYMS: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let entries: &[(&str, &[&str])] = &[
        // Languages and runtimes
        ("js", &["javascript"]),
        ("javascript", &["js", "node"]),
        ("ts", &["typescript"]),
        ("typescript", &["ts"]),
        ("py", &["python"]),
        ("python", &["py"]),
        ("golang", &["go"]),
        ("node", &["nodejs", "javascript"]),
        ("nodejs", &["node", "javascript"]),
        // Data stores
        ("postgres", &["postgresql", "sql"]),
        ("postgresql", &["postgres", "sql"]),
        ("mysql", &["sql"]),
        ("database", &["db", "sql"]),
        ("db", &["database"]),
        // Cloud and infrastructure
        ("aws", &["amazon", "cloud"]),
        ("azure", &["cloud"]),
        ("gcp", &["google", "cloud"]),
        ("docker", &["containers"]),
        ("kubernetes", &["containers", "orchestration"]),
        ("devops", &["ci", "deployment"]),
        // Web
        ("react", &["frontend"]),
        ("angular", &["frontend"]),
        ("vue", &["frontend"]),
        ("frontend", &["ui"]),
        ("backend", &["server"]),
        ("fullstack", &["frontend", "backend"]),
        ("api", &["rest"]),
        ("rest", &["api"]),
        ("graphql", &["api"]),
        // Roles and practices
        ("ml", &["machine", "learning"]),
        ("ai", &["ml"]),
        ("qa", &["testing"]),
        ("testing", &["qa"]),
        ("developer", &["engineer"]),
        ("engineer", &["developer"]),
    ];

    entries.iter().copied().collect()
});

/// Union of the input tokens and the synonyms mapped to them, deduplicated.
pub fn expand(tokens: &[String]) -> HashSet<String> {
    let mut expanded: HashSet<String> = tokens.iter().cloned().collect();

    for token in tokens {
        if let Some(synonyms) = SYNONYMS.get(token.as_str()) {
            for synonym in *synonyms {
                expanded.insert((*synonym).to_string());
            }
        }
    }

    expanded
}
