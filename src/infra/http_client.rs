use crate::app::ports::GeocodeProviderPort;
use crate::config::Config;
use crate::error::{LookupError, Result};
use crate::scoring::Candidate;
use async_trait::async_trait;
use tracing::debug;

/// Search client for the maps.co geocoding endpoint
pub struct ReqwestGeocodeProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ReqwestGeocodeProvider {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            // an unset key is sent as-is and left to the provider to reject
            api_key: config.api_key.clone().unwrap_or_default(),
        })
    }
}

#[async_trait]
impl GeocodeProviderPort for ReqwestGeocodeProvider {
    async fn search(&self, query: &str) -> std::result::Result<Vec<Candidate>, LookupError> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("q", query), ("api_key", self.api_key.as_str())])
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }
        let bytes = resp.bytes().await?;
        debug!("Received {} bytes for query", bytes.len());
        parse_candidates(&bytes)
    }
}

/// Decode a search response body into candidates.
pub fn parse_candidates(body: &[u8]) -> std::result::Result<Vec<Candidate>, LookupError> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_candidate_list() {
        let body = br#"[
            {"place_id": 1, "importance": 0.2, "display_name": "1 Main St, Springfield",
             "class": "highway", "type": "residential", "lat": "39.1", "lon": "-89.6"}
        ]"#;
        let candidates = parse_candidates(body).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].class.as_deref(), Some("highway"));
        assert_eq!(candidates[0].coordinates().lat, "39.1");
    }

    #[test]
    fn empty_list_is_ok() {
        assert!(parse_candidates(b"[]").unwrap().is_empty());
    }

    #[test]
    fn error_object_is_malformed() {
        let err = parse_candidates(br#"{"error": "Invalid API key"}"#).unwrap_err();
        assert!(matches!(err, LookupError::MalformedResponse(_)));
    }

    #[test]
    fn incomplete_candidates_still_parse() {
        let body = br#"[
            {"importance": 0.3, "display_name": "1 Main St", "class": "highway", "lat": "1", "lon": "2"},
            {"display_name": "Somewhere", "class": null, "lat": "3", "lon": "4"},
            {"display_name": "Nowhere", "class": "place", "lon": "5"}
        ]"#;
        let candidates = parse_candidates(body).unwrap();
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[1].class, None);
        assert!(!candidates[2].coordinates().is_complete());
    }
}
