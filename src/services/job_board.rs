use std::sync::Arc;

use crate::models::Job;

// Job listings shipped with the backend, embedded at compile time and
// parsed once at startup.
const JOBS_JSON: &str = include_str!("../../data/jobs.json");

/// Static, read-only collection of job postings, served verbatim in its
/// fixed order on every request.
pub struct JobBoard {
    jobs: Arc<Vec<Job>>,
}

impl JobBoard {
    pub fn load() -> Result<Self, serde_json::Error> {
        let jobs: Vec<Job> = serde_json::from_str(JOBS_JSON)?;
        Ok(Self {
            jobs: Arc::new(jobs),
        })
    }

    pub fn listings(&self) -> &[Job] {
        &self.jobs
    }
}

impl Clone for JobBoard {
    fn clone(&self) -> Self {
        Self {
            jobs: self.jobs.clone(),
        }
    }
}
