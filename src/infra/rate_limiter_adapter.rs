use crate::app::ports::RateLimiterPort;
use crate::infra::rate_limiter::FixedDelayLimiter;
use async_trait::async_trait;

pub struct RateLimiterAdapter(pub FixedDelayLimiter);

#[async_trait]
impl RateLimiterPort for RateLimiterAdapter {
    async fn acquire(&self) {
        self.0.acquire().await;
    }
}
