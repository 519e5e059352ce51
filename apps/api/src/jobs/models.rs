use serde::{Deserialize, Serialize};

use crate::matching::ScoredMatch;

/// Experience levels offered by the search form.
pub const EXPERIENCE_LEVELS: &[&str] = &[
    "Entry level",
    "Associate",
    "Mid-Senior level",
    "Director",
    "Executive",
];

/// Job types offered by the search form.
pub const JOB_TYPES: &[&str] = &["Full-time", "Part-time", "Contract", "Temporary", "Internship"];

/// A job posting as returned by a `JobSource`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub keyword: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub experience_levels: Vec<String>,
    #[serde(default)]
    pub job_types: Vec<String>,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Self::default()
        }
    }

    /// First experience level or job type not offered by the search form.
    pub fn unknown_filter(&self) -> Option<&str> {
        self.experience_levels
            .iter()
            .find(|level| !EXPERIENCE_LEVELS.contains(&level.as_str()))
            .or_else(|| {
                self.job_types
                    .iter()
                    .find(|job_type| !JOB_TYPES.contains(&job_type.as_str()))
            })
            .map(String::as_str)
    }

    /// Trimmed location, `None` when blank.
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

/// Per-job scoring outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "match_status", rename_all = "snake_case")]
pub enum MatchStatus {
    /// No resume was supplied for this search.
    Unscored,
    Matched(ScoredMatch),
    Failed { reason: String },
}

impl MatchStatus {
    pub fn score(&self) -> Option<f64> {
        match self {
            MatchStatus::Matched(m) => Some(m.result.similarity_score),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRecord {
    #[serde(flatten)]
    pub listing: JobListing,
    #[serde(flatten)]
    pub status: MatchStatus,
}

impl JobRecord {
    pub fn unscored(listing: JobListing) -> Self {
        Self {
            listing,
            status: MatchStatus::Unscored,
        }
    }
}

/// Counts over one batch of job records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub matched: usize,
    pub failed: usize,
    pub unscored: usize,
    pub best_score: Option<f64>,
}
