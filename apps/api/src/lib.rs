//! Job board applicant screening.
//!
//! The core is [`matching`]: a pure scorer that compares resume text with job
//! requirement text. The remaining modules wrap it in an HTTP service that
//! fetches resumes, screens a job's applications in bulk and writes back
//! application statuses.

pub mod applications;
pub mod config;
pub mod db;
pub mod errors;
pub mod matching;
pub mod models;
pub mod resume_store;
pub mod routes;
pub mod state;
