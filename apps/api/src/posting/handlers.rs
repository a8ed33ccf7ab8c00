//! Axum route handlers for the posting page.

use askama::Template;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::posting::generator::{self, PostingRequest};
use crate::posting::selectors::{Department, Industry};
use crate::posting::views::IndexPage;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    pub job: String,
    pub industry: String,
    #[serde(default)]
    pub department: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DownloadForm {
    pub content: String,
}

/// GET /
/// The idle page: selectors and the trigger button, nothing generated yet.
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let page = IndexPage::idle(&state.catalog);
    Ok(Html(page.render()?))
}

/// POST /generate
/// One full generation cycle. A remote-call failure re-renders the page
/// with an inline error containing the provider's text; the selectors keep
/// the submitted selection in either outcome.
pub async fn handle_generate(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> Result<Html<String>, AppError> {
    let industry = Industry::parse(&form.industry)
        .ok_or_else(|| AppError::Validation(format!("Unknown industry: {}", form.industry)))?;
    let department = match form.department.as_deref() {
        None | Some("") => None,
        Some(value) => Some(Department::parse(value).ok_or_else(|| {
            AppError::Validation(format!("Unknown department: {value}"))
        })?),
    };
    // The rendered selector makes an out-of-catalog job impossible, but the
    // form itself is forgeable.
    if !state.catalog.contains(&form.job) {
        return Err(AppError::Validation(format!(
            "Unknown job category: {}",
            form.job
        )));
    }

    let request = PostingRequest {
        job: form.job.clone(),
        industry,
        department,
    };
    let page = IndexPage::with_selection(&state.catalog, form.job, industry, department);

    let page = match generator::generate_posting(&state.llm, &request).await {
        Ok(text) => page.with_result(&state.catalog, text),
        Err(AppError::Llm(message)) => {
            warn!("Generation attempt failed: {message}");
            page.with_error(format!("OpenAI API error: {message}"))
        }
        Err(other) => return Err(other),
    };

    Ok(Html(page.render()?))
}

/// POST /download
/// Echoes the generated text back as a plain-text attachment. Nothing is
/// stored server-side; the page posts back the text it already shows.
pub async fn handle_download(Form(form): Form<DownloadForm>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"out_put.txt\"",
            ),
        ],
        form.content,
    )
        .into_response()
}
