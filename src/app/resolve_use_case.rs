use tracing::{debug, instrument, warn};

use crate::app::ports::{GeocodeProviderPort, RateLimiterPort};
use crate::error::LookupError;
use crate::scoring::{best_candidate, Coordinates};
use crate::tokenizer::tokenize;

/// Use case for turning one address into coordinates
pub struct GeocodeResolver {
    provider: Box<dyn GeocodeProviderPort>,
    limiter: Box<dyn RateLimiterPort>,
}

impl GeocodeResolver {
    pub fn new(provider: Box<dyn GeocodeProviderPort>, limiter: Box<dyn RateLimiterPort>) -> Self {
        Self { provider, limiter }
    }

    /// Resolve an address to the coordinates of its best-scoring candidate.
    ///
    /// The rate limiter is always waited on first, even for addresses that
    /// turn out to have nothing to search for.
    #[instrument(skip(self))]
    pub async fn resolve(&self, address: &str) -> Result<Coordinates, LookupError> {
        self.limiter.acquire().await;

        let tokens = tokenize(Some(address));
        if tokens.is_empty() {
            return Err(LookupError::EmptyAddress);
        }

        let candidates = self.provider.search(address).await?;
        let candidate_count = candidates.len();
        let best = best_candidate(candidates, &tokens).ok_or(LookupError::NoCandidates)?;
        debug!(
            "Picked candidate {} of {} with score {:.3}",
            best.index, candidate_count, best.score
        );

        let coordinates = best.candidate.coordinates();
        if !coordinates.is_complete() {
            return Err(LookupError::MissingCoordinates);
        }
        Ok(coordinates)
    }

    /// Like `resolve`, but any failure becomes `None`.
    pub async fn lookup(&self, address: &str) -> Option<Coordinates> {
        match self.resolve(address).await {
            Ok(coordinates) => Some(coordinates),
            Err(e) => {
                warn!(address = %address, "No coordinates found: {}", e);
                None
            }
        }
    }
}
