pub mod api;
pub mod config;
pub mod db;
pub mod logging;
pub mod matching;
pub mod normalize;
pub mod run_id;
pub mod text;

use serde::{Deserialize, Serialize};

// Document models as the ingestion collaborators store them. Text fields are
// optional at this boundary; `normalize` produces the fully populated views
// the scoring core consumes.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub job_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub apply_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub candidate_id: String,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub resume_text: Option<String>,
}
