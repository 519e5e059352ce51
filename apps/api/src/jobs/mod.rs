pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod source;

pub use models::{BatchSummary, JobListing, JobRecord, MatchStatus, SearchQuery};
pub use pipeline::{match_listings, summarize};
pub use source::{HttpJobSource, JobSource, JobSourceError, StaticJobSource};
