/// Environment variable names read by `Config::from_env`
pub const API_KEY_VAR: &str = "GEOCODING_API_KEY";
pub const ADDRESS_COLUMN_VAR: &str = "CSV_ADDRESS_COLUMN";
pub const LAT_COLUMN_VAR: &str = "CSV_LAT_COLUMN";
pub const LNG_COLUMN_VAR: &str = "CSV_LNG_COLUMN";
pub const MAX_ROWS_VAR: &str = "MAX_ROWS";
pub const REQUEST_DELAY_VAR: &str = "REQUEST_DELAY";
pub const BASE_URL_VAR: &str = "GEOCODING_BASE_URL";
pub const TIMEOUT_VAR: &str = "GEOCODING_TIMEOUT_SECS";
pub const LOG_DIR_VAR: &str = "GEOCODER_LOG_DIR";

// Defaults
pub const DEFAULT_ADDRESS_COLUMN: &str = "address";
pub const DEFAULT_LAT_COLUMN: &str = "lat";
pub const DEFAULT_LNG_COLUMN: &str = "lng";
pub const DEFAULT_MAX_ROWS: usize = 3000;
pub const DEFAULT_REQUEST_DELAY_SECS: u64 = 1;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BASE_URL: &str = "https://geocode.maps.co/search";

/// Progress is printed once every this many rows
pub const PROGRESS_INTERVAL: usize = 10;

// Score weights
pub const BOTH_TOKENS_BONUS: f64 = 0.5;
pub const CITY_TOKEN_BONUS: f64 = 0.3;
pub const LOCATION_TOKEN_BONUS: f64 = 0.1;
pub const SINGLE_TOKEN_BONUS: f64 = 0.2;
pub const PLACE_CLASS_BONUS: f64 = 0.3;
pub const HIGHWAY_CLASS_BONUS: f64 = 0.2;
pub const AMENITY_CLASS_BONUS: f64 = 0.1;
