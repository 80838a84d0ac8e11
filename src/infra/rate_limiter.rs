use std::time::Duration;

/// Waits a fixed delay before every request.
///
/// Requests are issued one at a time, so there is no bucket to refill; each
/// call simply sleeps for the configured delay.
#[derive(Clone, Debug)]
pub struct FixedDelayLimiter {
    delay: Duration,
}

impl FixedDelayLimiter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn acquire(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
