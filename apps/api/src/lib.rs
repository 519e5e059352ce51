pub mod config;
pub mod errors;
pub mod extraction;
pub mod jobs;
pub mod matching;
pub mod routes;
pub mod skills;
pub mod state;
