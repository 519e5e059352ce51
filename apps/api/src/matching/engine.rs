//! Scores one resume against one job description.
//!
//! The TF-IDF model is fitted on the job description only; the resume is
//! projected into that vocabulary and compared by cosine similarity. Skill
//! gaps come from the skill extractor run on both documents.
//!
//! `similarity` and `match_pair` are the stateless entry points. `ResumeMatcher`
//! keeps the fitted model and the job's skills around when the same job is
//! scored against several resumes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::tfidf::{cosine_similarity, SparseVector, TfidfVectorizer};
use crate::matching::MatchError;
use crate::skills::{SkillExtractor, SkillMatchMode, SkillSet};

const HIGH_MATCH_THRESHOLD: f64 = 0.7;
const MEDIUM_MATCH_THRESHOLD: f64 = 0.4;

/// Outcome of matching one resume against one job description.
///
/// `matched_skills` and `missing_skills` are disjoint and together form the
/// job's extracted skill set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub similarity_score: f64,
    pub matched_skills: SkillSet,
    pub missing_skills: SkillSet,
}

impl MatchResult {
    /// Whole-number percentage, as shown next to a job card.
    pub fn match_percentage(&self) -> u32 {
        (self.similarity_score * 100.0).round() as u32
    }

    pub fn tier(&self) -> MatchTier {
        MatchTier::from_score(self.similarity_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    High,
    Medium,
    Low,
}

impl MatchTier {
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_MATCH_THRESHOLD {
            MatchTier::High
        } else if score >= MEDIUM_MATCH_THRESHOLD {
            MatchTier::Medium
        } else {
            MatchTier::Low
        }
    }
}

/// A `MatchResult` together with its display fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMatch {
    #[serde(flatten)]
    pub result: MatchResult,
    pub match_percentage: u32,
    pub tier: MatchTier,
}

impl From<MatchResult> for ScoredMatch {
    fn from(result: MatchResult) -> Self {
        Self {
            match_percentage: result.match_percentage(),
            tier: result.tier(),
            result,
        }
    }
}

/// Matcher bound to a single job description.
#[derive(Debug, Clone)]
pub struct ResumeMatcher {
    vectorizer: TfidfVectorizer,
    job_vector: SparseVector,
    job_skills: SkillSet,
    extractor: SkillExtractor,
}

impl ResumeMatcher {
    pub fn new(job_description: &str) -> Result<Self, MatchError> {
        Self::with_mode(job_description, SkillMatchMode::default())
    }

    pub fn with_mode(job_description: &str, mode: SkillMatchMode) -> Result<Self, MatchError> {
        if job_description.trim().is_empty() {
            return Err(MatchError::EmptyJobDescription);
        }

        let vectorizer = TfidfVectorizer::fit(&[job_description])?;
        let job_vector = vectorizer.transform(job_description);
        let extractor = SkillExtractor::new(mode);
        let job_skills = extractor.extract(job_description);

        Ok(Self {
            vectorizer,
            job_vector,
            job_skills,
            extractor,
        })
    }

    /// Scores `resume_text`. Never fails: an empty resume scores 0.0 and
    /// leaves every job skill missing.
    pub fn match_resume(&self, resume_text: &str) -> MatchResult {
        let similarity_score = self.similarity(resume_text);

        let resume_skills = self.extractor.extract(resume_text);
        let matched_skills: SkillSet = self
            .job_skills
            .intersection(&resume_skills)
            .cloned()
            .collect();
        let missing_skills: SkillSet = self
            .job_skills
            .difference(&resume_skills)
            .cloned()
            .collect();

        debug!(
            similarity_score,
            matched = matched_skills.len(),
            missing = missing_skills.len(),
            "resume matched"
        );

        MatchResult {
            similarity_score,
            matched_skills,
            missing_skills,
        }
    }

    fn similarity(&self, resume_text: &str) -> f64 {
        // Skip vectorization entirely for blank resumes.
        if resume_text.trim().is_empty() {
            return 0.0;
        }
        let resume_vector = self.vectorizer.transform(resume_text);
        cosine_similarity(&self.job_vector, &resume_vector)
    }
}

/// Cosine similarity of `resume` to `job`, with a model fitted on `job` and
/// discarded afterwards.
pub fn similarity(job: &str, resume: &str) -> Result<f64, MatchError> {
    Ok(ResumeMatcher::new(job)?.match_resume(resume).similarity_score)
}

/// One-shot match of a single (job, resume) pair.
pub fn match_pair(job: &str, resume: &str, mode: SkillMatchMode) -> Result<MatchResult, MatchError> {
    Ok(ResumeMatcher::with_mode(job, mode)?.match_resume(resume))
}
