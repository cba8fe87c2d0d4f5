//! Document normalization.
//!
//! The stores hand back records with optional text fields. Everything the
//! scoring core touches goes through here first, so absence handling lives
//! in exactly one reviewable place: missing fields become empty strings, and
//! an empty document simply fails the skill gate downstream.

use crate::{Candidate, Job};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobProfile {
    pub job_id: String,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub apply_url: String,
}

impl JobProfile {
    /// Text scored against the counterpart: title and description together.
    pub fn combined_text(&self) -> String {
        if self.title.is_empty() {
            return self.description.clone();
        }
        if self.description.is_empty() {
            return self.title.clone();
        }
        format!("{} {}", self.title, self.description)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateProfile {
    pub candidate_id: String,
    pub name: String,
    pub email: String,
    pub resume_text: String,
}

pub fn normalize_job(job: &Job) -> JobProfile {
    JobProfile {
        job_id: job.job_id.clone(),
        title: field(&job.title),
        description: field(&job.description),
        company: field(&job.company),
        location: field(&job.location),
        apply_url: field(&job.apply_url),
    }
}

pub fn normalize_candidate(candidate: &Candidate) -> CandidateProfile {
    CandidateProfile {
        candidate_id: candidate.candidate_id.clone(),
        name: display_name(candidate),
        email: field(&candidate.email),
        resume_text: field(&candidate.resume_text),
    }
}

/// Fallback chain for the display name: `name`, then `full_name`, then
/// `first_name last_name` from whichever parts exist.
fn display_name(candidate: &Candidate) -> String {
    let name = field(&candidate.name);
    if !name.is_empty() {
        return name;
    }

    let full_name = field(&candidate.full_name);
    if !full_name.is_empty() {
        return full_name;
    }

    let first = field(&candidate.first_name);
    let last = field(&candidate.last_name);
    match (first.is_empty(), last.is_empty()) {
        (false, false) => format!("{first} {last}"),
        (false, true) => first,
        (true, false) => last,
        (true, true) => String::new(),
    }
}

fn field(value: &Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_become_empty_strings() {
        let job = Job {
            job_id: "j1".into(),
            title: Some("Backend Engineer".into()),
            ..Job::default()
        };

        let profile = normalize_job(&job);
        assert_eq!(profile.title, "Backend Engineer");
        assert_eq!(profile.description, "");
        assert_eq!(profile.apply_url, "");
        assert_eq!(profile.combined_text(), "Backend Engineer");
    }

    #[test]
    fn combined_text_joins_title_and_description() {
        let job = Job {
            job_id: "j1".into(),
            title: Some("Data Engineer".into()),
            description: Some("python sql".into()),
            ..Job::default()
        };

        assert_eq!(normalize_job(&job).combined_text(), "Data Engineer python sql");
    }

    #[test]
    fn display_name_falls_back_through_the_chain() {
        let mut candidate = Candidate {
            candidate_id: "c1".into(),
            name: Some("  Ada Lovelace  ".into()),
            full_name: Some("A. Lovelace".into()),
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            ..Candidate::default()
        };
        assert_eq!(normalize_candidate(&candidate).name, "Ada Lovelace");

        candidate.name = None;
        assert_eq!(normalize_candidate(&candidate).name, "A. Lovelace");

        candidate.full_name = None;
        assert_eq!(normalize_candidate(&candidate).name, "Ada Lovelace");

        candidate.first_name = None;
        assert_eq!(normalize_candidate(&candidate).name, "Lovelace");

        candidate.last_name = None;
        assert_eq!(normalize_candidate(&candidate).name, "");
    }

    #[test]
    fn missing_resume_yields_empty_text() {
        let candidate = Candidate {
            candidate_id: "c1".into(),
            ..Candidate::default()
        };
        assert_eq!(normalize_candidate(&candidate).resume_text, "");
    }
}
