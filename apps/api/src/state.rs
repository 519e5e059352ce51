use std::sync::Arc;

use crate::config::Config;
use crate::jobs::source::JobSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Listings provider for job search. `None` when `JOB_SOURCE_URL` is unset.
    pub job_source: Option<Arc<dyn JobSource>>,
}

impl AppState {
    pub fn new(config: Config, job_source: Option<Arc<dyn JobSource>>) -> Self {
        Self { config, job_source }
    }
}
