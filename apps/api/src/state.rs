use std::sync::Arc;

use crate::catalog::JobCatalog;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is immutable after startup, so sharing across
/// concurrent sessions needs no locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<JobCatalog>,
    pub llm: LlmClient,
}
