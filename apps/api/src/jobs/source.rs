//! Job listing sources.
//!
//! `HttpJobSource` queries an external listings endpoint; `StaticJobSource`
//! serves a fixed in-memory list. Handlers only see `Arc<dyn JobSource>`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::jobs::models::{JobListing, SearchQuery};

#[derive(Debug, Error)]
pub enum JobSourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no job source is configured (set JOB_SOURCE_URL)")]
    NotConfigured,
}

#[async_trait]
pub trait JobSource: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<JobListing>, JobSourceError>;

    fn name(&self) -> &str;
}

#[derive(Debug, Deserialize)]
struct SourceError {
    message: String,
}

#[derive(Clone)]
pub struct HttpJobSource {
    client: Client,
    base_url: String,
}

impl HttpJobSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, JobSourceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn query_params(query: &SearchQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![("keywords", query.keyword.trim().to_string())];
        if let Some(location) = query.location() {
            params.push(("location", location.to_string()));
        }
        if !query.experience_levels.is_empty() {
            params.push(("experience", query.experience_levels.join(",")));
        }
        if !query.job_types.is_empty() {
            params.push(("job_type", query.job_types.join(",")));
        }
        params
    }
}

#[async_trait]
impl JobSource for HttpJobSource {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<JobListing>, JobSourceError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&Self::query_params(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<SourceError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            warn!("Job source returned {}: {}", status, message);
            return Err(JobSourceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let listings: Vec<JobListing> = serde_json::from_str(&body)?;
        debug!(
            "Job source returned {} listings for '{}'",
            listings.len(),
            query.keyword
        );
        Ok(listings)
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Fixed listings filtered by keyword; location and filters are ignored.
#[derive(Debug, Clone, Default)]
pub struct StaticJobSource {
    listings: Vec<JobListing>,
}

impl StaticJobSource {
    pub fn new(listings: Vec<JobListing>) -> Self {
        Self { listings }
    }
}

#[async_trait]
impl JobSource for StaticJobSource {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<JobListing>, JobSourceError> {
        let keyword = query.keyword.trim().to_lowercase();
        Ok(self
            .listings
            .iter()
            .filter(|job| {
                job.title.to_lowercase().contains(&keyword)
                    || job.description.to_lowercase().contains(&keyword)
            })
            .cloned()
            .collect())
    }

    fn name(&self) -> &str {
        "static"
    }
}
