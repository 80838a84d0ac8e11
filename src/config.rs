use crate::constants::*;
use crate::error::{GeocoderError, Result};
use std::time::Duration;

/// Settings for a geocoding run, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub address_column: String,
    pub lat_column: String,
    pub lng_column: String,
    pub max_rows: usize,
    pub request_delay: Duration,
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            address_column: DEFAULT_ADDRESS_COLUMN.to_string(),
            lat_column: DEFAULT_LAT_COLUMN.to_string(),
            lng_column: DEFAULT_LNG_COLUMN.to_string(),
            max_rows: DEFAULT_MAX_ROWS,
            request_delay: Duration::from_secs(DEFAULT_REQUEST_DELAY_SECS),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_rows = parse_number(&lookup, MAX_ROWS_VAR)?.unwrap_or(defaults.max_rows);
        let request_delay = parse_number(&lookup, REQUEST_DELAY_VAR)?
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_delay);
        let request_timeout = parse_number(&lookup, TIMEOUT_VAR)?
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        Ok(Self {
            api_key: lookup(API_KEY_VAR),
            address_column: lookup(ADDRESS_COLUMN_VAR).unwrap_or(defaults.address_column),
            lat_column: lookup(LAT_COLUMN_VAR).unwrap_or(defaults.lat_column),
            lng_column: lookup(LNG_COLUMN_VAR).unwrap_or(defaults.lng_column),
            max_rows,
            request_delay,
            base_url: lookup(BASE_URL_VAR).unwrap_or(defaults.base_url),
            request_timeout,
        })
    }
}

fn parse_number<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| {
            GeocoderError::Config(format!("{key} must be a whole number, got '{raw}': {e}"))
        }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.api_key, None);
        assert_eq!(config.address_column, "address");
        assert_eq!(config.lat_column, "lat");
        assert_eq!(config.lng_column, "lng");
        assert_eq!(config.max_rows, 3000);
        assert_eq!(config.request_delay, Duration::from_secs(1));
        assert_eq!(config.base_url, "https://geocode.maps.co/search");
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEOCODING_API_KEY", "secret"),
            ("CSV_ADDRESS_COLUMN", "street"),
            ("CSV_LAT_COLUMN", "latitude"),
            ("CSV_LNG_COLUMN", "longitude"),
            ("MAX_ROWS", "25"),
            ("REQUEST_DELAY", "0"),
        ]))
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.address_column, "street");
        assert_eq!(config.lat_column, "latitude");
        assert_eq!(config.lng_column, "longitude");
        assert_eq!(config.max_rows, 25);
        assert_eq!(config.request_delay, Duration::ZERO);
    }

    #[test]
    fn bad_number_is_a_config_error() {
        let err = Config::from_lookup(lookup_from(&[("MAX_ROWS", "lots")])).unwrap_err();
        match err {
            GeocoderError::Config(msg) => assert!(msg.contains("MAX_ROWS")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
