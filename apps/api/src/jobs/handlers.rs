use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::handlers::UploadedFile;
use crate::extraction::extract_text;
use crate::jobs::models::{BatchSummary, JobListing, JobRecord, SearchQuery};
use crate::jobs::pipeline::{match_listings, summarize};
use crate::jobs::source::JobSourceError;
use crate::state::AppState;

const NO_RESULTS_NOTICE: &str =
    "No jobs found matching your search criteria. Try broadening your search.";

#[derive(Debug, Deserialize)]
pub struct MatchJobsRequest {
    pub jobs: Vec<JobListing>,
    #[serde(default)]
    pub resume_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(flatten)]
    pub query: SearchQuery,
    #[serde(default)]
    pub resume_text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub search_id: Uuid,
    pub searched_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    pub total: usize,
    pub summary: BatchSummary,
    pub jobs: Vec<JobRecord>,
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl SearchResponse {
    fn new(keyword: Option<String>, jobs: Vec<JobRecord>, warnings: Vec<String>) -> Self {
        let notice = jobs.is_empty().then(|| NO_RESULTS_NOTICE.to_string());
        Self {
            search_id: Uuid::new_v4(),
            searched_at: Utc::now(),
            keyword,
            total: jobs.len(),
            summary: summarize(&jobs),
            jobs,
            warnings,
            notice,
        }
    }
}

/// A pasted resume that is blank counts as no resume at all.
fn supplied_resume(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

/// Runs the CPU-bound batch off the async executor.
async fn score_listings(
    state: &AppState,
    listings: Vec<JobListing>,
    resume: Option<String>,
) -> Result<Vec<JobRecord>, AppError> {
    let mode = state.config.skill_match_mode;
    let records = tokio::task::spawn_blocking(move || {
        match_listings(listings, resume.as_deref(), mode)
    })
    .await
    .map_err(|e| anyhow::anyhow!("matching task failed: {e}"))?;
    Ok(records)
}

async fn search_and_score(
    state: &AppState,
    query: SearchQuery,
    resume: Option<String>,
    warnings: Vec<String>,
) -> Result<SearchResponse, AppError> {
    if query.keyword.trim().is_empty() {
        return Err(AppError::Validation(
            "Please enter a valid job keyword".to_string(),
        ));
    }

    if let Some(filter) = query.unknown_filter() {
        return Err(AppError::Validation(format!(
            "Unknown search filter '{filter}'"
        )));
    }

    let source = state
        .job_source
        .as_ref()
        .ok_or(JobSourceError::NotConfigured)?;

    let listings = source.search(&query).await?;
    info!(
        "Job source '{}' returned {} listings for '{}'",
        source.name(),
        listings.len(),
        query.keyword
    );

    let records = score_listings(state, listings, resume).await?;
    Ok(SearchResponse::new(Some(query.keyword), records, warnings))
}

/// POST /api/v1/jobs/match
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Json(req): Json<MatchJobsRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let resume = supplied_resume(req.resume_text);
    let records = score_listings(&state, req.jobs, resume).await?;
    Ok(Json(SearchResponse::new(None, records, Vec::new())))
}

/// POST /api/v1/jobs/search
pub async fn handle_search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let resume = supplied_resume(req.resume_text);
    let response = search_and_score(&state, req.query, resume, Vec::new()).await?;
    Ok(Json(response))
}

/// POST /api/v1/jobs/search/upload
///
/// Multipart fields: `keyword`, `location`, repeated `experience_level` and
/// `job_type`, and an optional `resume` file. A resume that cannot be read
/// is reported in `warnings` and the search continues with an empty resume.
pub async fn handle_search_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SearchResponse>, AppError> {
    let mut query = SearchQuery::default();
    let mut upload: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => upload = Some(UploadedFile::read(field).await?),
            "keyword" => query.keyword = read_text(field).await?,
            "location" => query.location = Some(read_text(field).await?),
            "experience_level" => query.experience_levels.push(read_text(field).await?),
            "job_type" => query.job_types.push(read_text(field).await?),
            other => warn!("Ignoring unknown multipart field '{other}'"),
        }
    }

    let mut warnings = Vec::new();
    let resume = match upload {
        None => None,
        Some(file) => {
            let file_name = file.file_name.clone();
            let extracted = tokio::task::spawn_blocking(move || {
                extract_text(
                    file.file_name.as_deref(),
                    file.content_type.as_deref(),
                    &file.bytes,
                )
            })
            .await
            .map_err(|e| anyhow::anyhow!("extraction task failed: {e}"))?;

            match extracted {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!(
                        file = file_name.as_deref().unwrap_or("unknown"),
                        error = %e,
                        "resume extraction failed; matching with an empty resume"
                    );
                    warnings.push(format!("Error processing file: {e}"));
                    Some(String::new())
                }
            }
        }
    };

    let response = search_and_score(&state, query, resume, warnings).await?;
    Ok(Json(response))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart field: {e}")))
}
