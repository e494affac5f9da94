//! Resume Store: retrieves resume text for the matcher from wherever it was uploaded.
//!
//! Locations are either public HTTP(S) URLs or `s3://bucket/key` references.
//! Only plain text is produced; binary formats are decoded lossily, not parsed.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>` so handlers and tests share one seam.

use async_trait::async_trait;
use bytes::BytesMut;
use thiserror::Error;

pub mod cache;
pub mod remote;

pub use cache::CachedResumeStore;
pub use remote::RemoteResumeStore;

#[derive(Debug, Error)]
pub enum ResumeFetchError {
    #[error("Unsupported resume location: {0}")]
    InvalidLocation(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Resume request to {location} returned status {status}")]
    Status { location: String, status: u16 },

    #[error("S3 error: {0}")]
    S3(String),

    #[error("Resume is {size} bytes, limit is {limit}")]
    TooLarge { size: u64, limit: u64 },
}

/// Where a resume lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeLocation {
    Http(String),
    S3 { bucket: String, key: String },
}

impl ResumeLocation {
    pub fn parse(location: &str) -> Result<Self, ResumeFetchError> {
        let location = location.trim();
        if let Some(rest) = location.strip_prefix("s3://") {
            return match rest.split_once('/') {
                Some((bucket, key)) if !bucket.is_empty() && !key.is_empty() => {
                    Ok(ResumeLocation::S3 {
                        bucket: bucket.to_string(),
                        key: key.to_string(),
                    })
                }
                _ => Err(ResumeFetchError::InvalidLocation(location.to_string())),
            };
        }

        let lower = location.to_ascii_lowercase();
        let has_host = ["http://", "https://"]
            .iter()
            .find_map(|scheme| lower.strip_prefix(scheme))
            .map(|rest| !rest.is_empty())
            .unwrap_or(false);
        if has_host {
            Ok(ResumeLocation::Http(location.to_string()))
        } else {
            Err(ResumeFetchError::InvalidLocation(location.to_string()))
        }
    }
}

/// Appends one downloaded chunk, failing as soon as the body would exceed `limit` bytes.
pub fn append_chunk(body: &mut BytesMut, chunk: &[u8], limit: u64) -> Result<(), ResumeFetchError> {
    let size = (body.len() + chunk.len()) as u64;
    if size > limit {
        return Err(ResumeFetchError::TooLarge { size, limit });
    }
    body.extend_from_slice(chunk);
    Ok(())
}

/// Decodes a downloaded body as text, replacing invalid UTF-8 sequences.
pub fn decode_resume(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Fetches resume text by location. Implement to add new storage backends.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn fetch_text(&self, location: &str) -> Result<String, ResumeFetchError>;
}
