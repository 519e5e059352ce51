//! Batch matching of job listings against one resume.

use std::cmp::Ordering;

use tracing::{debug, info, warn};

use crate::jobs::models::{BatchSummary, JobListing, JobRecord, MatchStatus};
use crate::matching::ResumeMatcher;
use crate::skills::SkillMatchMode;

/// Scores every listing against `resume`.
///
/// With no resume every record is `Unscored` and the input order is kept.
/// Otherwise each job is matched on its own; jobs that cannot be scored
/// become `Failed` and sink to the bottom, the rest are ordered by
/// similarity, highest first.
pub fn match_listings(
    listings: Vec<JobListing>,
    resume: Option<&str>,
    mode: SkillMatchMode,
) -> Vec<JobRecord> {
    let Some(resume) = resume else {
        return listings.into_iter().map(JobRecord::unscored).collect();
    };

    let mut records: Vec<JobRecord> = listings
        .into_iter()
        .map(|listing| {
            let status = match ResumeMatcher::with_mode(&listing.description, mode) {
                Ok(matcher) => {
                    let result = matcher.match_resume(resume);
                    debug!(
                        title = %listing.title,
                        company = %listing.company,
                        score = result.similarity_score,
                        "job scored"
                    );
                    MatchStatus::Matched(result.into())
                }
                Err(e) => {
                    warn!(
                        title = %listing.title,
                        company = %listing.company,
                        error = %e,
                        "job could not be scored"
                    );
                    MatchStatus::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            JobRecord { listing, status }
        })
        .collect();

    records.sort_by(|a, b| compare_scores(a.status.score(), b.status.score()));

    let summary = summarize(&records);
    info!(
        jobs = records.len(),
        matched = summary.matched,
        failed = summary.failed,
        best_score = summary.best_score.unwrap_or(0.0),
        "batch matched"
    );

    records
}

/// Descending by score; records without a score go last.
fn compare_scores(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn summarize(records: &[JobRecord]) -> BatchSummary {
    records
        .iter()
        .fold(BatchSummary::default(), |mut summary, record| {
            match &record.status {
                MatchStatus::Unscored => summary.unscored += 1,
                MatchStatus::Failed { .. } => summary.failed += 1,
                MatchStatus::Matched(m) => {
                    summary.matched += 1;
                    let score = m.result.similarity_score;
                    summary.best_score = Some(summary.best_score.map_or(score, |b| b.max(score)));
                }
            }
            summary
        })
}
