use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use bytes::{Bytes, BytesMut};
use reqwest::Client;
use tracing::debug;

use crate::resume_store::{
    append_chunk, decode_resume, ResumeFetchError, ResumeLocation, ResumeStore,
};

/// Fetches resumes over HTTP(S) or from S3-compatible object storage.
#[derive(Clone)]
pub struct RemoteResumeStore {
    http: Client,
    s3: S3Client,
    max_bytes: u64,
}

impl RemoteResumeStore {
    pub fn new(s3: S3Client, timeout: Duration, max_bytes: u64) -> Result<Self, ResumeFetchError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            s3,
            max_bytes,
        })
    }

    fn check_declared_size(&self, declared: Option<u64>) -> Result<(), ResumeFetchError> {
        match declared {
            Some(size) if size > self.max_bytes => Err(ResumeFetchError::TooLarge {
                size,
                limit: self.max_bytes,
            }),
            _ => Ok(()),
        }
    }

    async fn fetch_http(&self, url: &str) -> Result<Bytes, ResumeFetchError> {
        let mut response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ResumeFetchError::Status {
                location: url.to_string(),
                status: status.as_u16(),
            });
        }
        self.check_declared_size(response.content_length())?;

        // Chunked bodies declare no length; the limit is enforced as data arrives.
        let mut body = BytesMut::new();
        while let Some(chunk) = response.chunk().await? {
            append_chunk(&mut body, &chunk, self.max_bytes)?;
        }
        Ok(body.freeze())
    }

    async fn fetch_s3(&self, bucket: &str, key: &str) -> Result<Bytes, ResumeFetchError> {
        let output = self
            .s3
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| ResumeFetchError::S3(format!("get_object {bucket}/{key}: {e}")))?;

        let declared = output.content_length().and_then(|len| u64::try_from(len).ok());
        self.check_declared_size(declared)?;

        let mut stream = output.body;
        let mut body = BytesMut::new();
        while let Some(chunk) = stream
            .try_next()
            .await
            .map_err(|e| ResumeFetchError::S3(format!("reading {bucket}/{key}: {e}")))?
        {
            append_chunk(&mut body, &chunk, self.max_bytes)?;
        }
        Ok(body.freeze())
    }
}

#[async_trait]
impl ResumeStore for RemoteResumeStore {
    async fn fetch_text(&self, location: &str) -> Result<String, ResumeFetchError> {
        let bytes = match ResumeLocation::parse(location)? {
            ResumeLocation::Http(url) => self.fetch_http(&url).await?,
            ResumeLocation::S3 { bucket, key } => self.fetch_s3(&bucket, &key).await?,
        };
        debug!("Fetched {} bytes of resume from {location}", bytes.len());
        Ok(decode_resume(&bytes))
    }
}
