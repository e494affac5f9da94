// Resume matching engine.
// Pure, synchronous scoring of resume text against job requirement text.
// Nothing here performs I/O; callers fetch resumes and requirements.

pub mod config;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod matcher;
pub mod report;
pub mod skills;

pub use config::MatchConfig;
pub use matcher::{match_resume, ResumeMatcher};
pub use report::{MatchError, MatchOutcome, MatchReport, SuggestedStatus};
