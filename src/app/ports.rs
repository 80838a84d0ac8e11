use crate::error::LookupError;
use crate::scoring::Candidate;
use async_trait::async_trait;

/// A geocoding search backend
#[async_trait]
pub trait GeocodeProviderPort: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Candidate>, LookupError>;
}

#[async_trait]
pub trait RateLimiterPort: Send + Sync {
    /// Wait until the next request is allowed.
    async fn acquire(&self);
}
