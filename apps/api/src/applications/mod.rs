// Job applications: loading jobs and applications, batch screening with the
// resume matcher, and status updates. Scores are never persisted; only the
// application status is written back.

pub mod handlers;
pub mod repository;
pub mod screening;
