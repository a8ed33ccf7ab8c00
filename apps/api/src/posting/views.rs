//! Askama template structs for the posting page.

use askama::Template;

use crate::catalog::JobCatalog;
use crate::fees;
use crate::posting::selectors::{Department, Industry, DEPARTMENTS, INDUSTRIES};

/// The single interactive page: the selector form plus, after a button
/// press, either the result block or an inline error. Selectors are present
/// in every state.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub jobs: Vec<String>,
    pub industries: Vec<Industry>,
    pub departments: Vec<Department>,
    pub selected_job: String,
    pub selected_industry: Industry,
    pub selected_department: String,
    pub result: Option<PostingResult>,
    pub error: Option<String>,
}

/// Result block data for one successful generation.
pub struct PostingResult {
    pub text: String,
    pub fee_estimate: String,
    pub videos: Vec<String>,
}

impl IndexPage {
    /// The idle page: nothing generated yet. Selection defaults to the first
    /// entry of each selector, matching what the browser shows.
    pub fn idle(catalog: &JobCatalog) -> Self {
        let selected_job = catalog
            .job_names()
            .first()
            .map(|name| name.to_string())
            .unwrap_or_default();
        Self::with_selection(catalog, selected_job, Industry::Startup, None)
    }

    /// Page carrying the submitted selection, before any result or error is
    /// attached.
    pub fn with_selection(
        catalog: &JobCatalog,
        selected_job: String,
        selected_industry: Industry,
        selected_department: Option<Department>,
    ) -> Self {
        Self {
            jobs: catalog.job_names().iter().map(|n| n.to_string()).collect(),
            industries: INDUSTRIES.to_vec(),
            departments: DEPARTMENTS.to_vec(),
            selected_job,
            selected_industry,
            selected_department: selected_department
                .unwrap_or(DEPARTMENTS[0])
                .as_str()
                .to_string(),
            result: None,
            error: None,
        }
    }

    /// Attaches the result block for a generated posting, with the fee
    /// estimate and video list derived from the selected job.
    pub fn with_result(mut self, catalog: &JobCatalog, text: String) -> Self {
        let videos = catalog
            .get(&self.selected_job)
            .map(|row| row.videos().iter().map(|v| v.to_string()).collect())
            .unwrap_or_default();
        self.result = Some(PostingResult {
            text,
            fee_estimate: fees::fee_estimate(&self.selected_job).to_string(),
            videos,
        });
        self
    }

    pub fn with_error(mut self, message: String) -> Self {
        self.error = Some(message);
        self
    }
}
