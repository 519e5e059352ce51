// Similarity engine: tokenizer → TF-IDF fitted on the job description → cosine score,
// plus the skill diff. Pure and synchronous; handlers run it on the blocking pool.

pub mod engine;
pub mod handlers;
pub mod stop_words;
pub mod tfidf;
pub mod tokenizer;

use thiserror::Error;

pub use engine::{match_pair, similarity, MatchResult, MatchTier, ResumeMatcher, ScoredMatch};

/// Rejected job description. Fatal to that matcher only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("job description is empty")]
    EmptyJobDescription,

    #[error("job description contains no indexable terms")]
    EmptyVocabulary,
}
