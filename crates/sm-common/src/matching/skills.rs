use std::collections::HashSet;

/// Recognized skill vocabulary in post-tokenizer form, sorted for binary
/// search. Terms reachable only through synonym expansion (e.g. "cloud")
/// are listed too so expanded token sets stay comparable.
const SKILL_VOCABULARY: &[&str] = &[
    "agile",
    "android",
    "angular",
    "ansible",
    "api",
    "aws",
    "azure",
    "backend",
    "bash",
    "c",
    "cloud",
    "css",
    "database",
    "devops",
    "django",
    "docker",
    "elasticsearch",
    "excel",
    "express",
    "fastapi",
    "flask",
    "frontend",
    "gcp",
    "git",
    "golang",
    "graphql",
    "hadoop",
    "html",
    "java",
    "javascript",
    "jenkins",
    "jira",
    "kafka",
    "kotlin",
    "kubernetes",
    "laravel",
    "linux",
    "microservices",
    "ml",
    "mongodb",
    "mysql",
    "node",
    "nodejs",
    "numpy",
    "pandas",
    "php",
    "postgres",
    "postgresql",
    "python",
    "rails",
    "react",
    "redis",
    "rest",
    "ruby",
    "rust",
    "scala",
    "spark",
    "spring",
    "sql",
    "swift",
    "terraform",
    "testing",
    "typescript",
    "vue",
];

pub fn is_skill(token: &str) -> bool {
    SKILL_VOCABULARY.binary_search(&token).is_ok()
}

fn recognized_skills(tokens: &HashSet<String>) -> HashSet<&str> {
    tokens
        .iter()
        .map(String::as_str)
        .filter(|token| is_skill(token))
        .collect()
}

/// Jaccard-style overlap between the recognized skills on each side.
///
/// Returns exactly 0.0 when the job side carries no recognized skill; that
/// is the primary early gate for discarding irrelevant pairs.
pub fn skill_overlap(job_tokens: &HashSet<String>, candidate_tokens: &HashSet<String>) -> f64 {
    let job_skills = recognized_skills(job_tokens);
    if job_skills.is_empty() {
        return 0.0;
    }

    let candidate_skills = recognized_skills(candidate_tokens);
    let intersection = job_skills.intersection(&candidate_skills).count() as f64;
    let union = job_skills.union(&candidate_skills).count().max(1) as f64;

    intersection / union
}
