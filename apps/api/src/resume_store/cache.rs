use async_trait::async_trait;
use redis::{AsyncCommands, Client as RedisClient};
use tracing::{debug, warn};

use crate::resume_store::{ResumeFetchError, ResumeStore};

const KEY_PREFIX: &str = "resume:text:";

/// Read-through Redis cache in front of another store.
///
/// Redis failures are logged and bypassed; they never fail a fetch.
pub struct CachedResumeStore<S> {
    inner: S,
    redis: RedisClient,
    ttl_secs: u64,
}

impl<S: ResumeStore> CachedResumeStore<S> {
    pub fn new(inner: S, redis: RedisClient, ttl_secs: u64) -> Self {
        Self {
            inner,
            redis,
            ttl_secs,
        }
    }

    async fn read(&self, key: &str) -> redis::RedisResult<Option<String>> {
        let mut con = self.redis.get_multiplexed_async_connection().await?;
        con.get(key).await
    }

    async fn write(&self, key: &str, text: &str) -> redis::RedisResult<()> {
        let mut con = self.redis.get_multiplexed_async_connection().await?;
        con.set_ex(key, text, self.ttl_secs).await
    }
}

pub fn cache_key(location: &str) -> String {
    format!("{KEY_PREFIX}{}", location.trim())
}

#[async_trait]
impl<S: ResumeStore> ResumeStore for CachedResumeStore<S> {
    async fn fetch_text(&self, location: &str) -> Result<String, ResumeFetchError> {
        let key = cache_key(location);

        match self.read(&key).await {
            Ok(Some(text)) => {
                debug!("Resume cache hit for {location}");
                return Ok(text);
            }
            Ok(None) => {}
            Err(e) => warn!("Resume cache read failed for {location}: {e}"),
        }

        let text = self.inner.fetch_text(location).await?;

        if self.ttl_secs > 0 {
            if let Err(e) = self.write(&key, &text).await {
                warn!("Resume cache write failed for {location}: {e}");
            }
        }
        Ok(text)
    }
}
