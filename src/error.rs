use thiserror::Error;

/// Fatal errors that abort a geocoding run
#[derive(Error, Debug)]
pub enum GeocoderError {
    #[error("File has {rows} rows. Maximum allowed is {max}")]
    RowLimitExceeded { rows: usize, max: usize },

    #[error("Address column '{0}' not found in CSV")]
    MissingAddressColumn(String),

    #[error("Latitude column '{lat}' or Longitude column '{lng}' not found in CSV")]
    MissingCoordinateColumns { lat: String, lng: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("Row on line {line} has {found} fields but the header has {expected}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GeocoderError>;

/// Reasons a single address could not be resolved.
///
/// These never abort a run; the pipeline treats every variant as "not found".
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("address has no searchable tokens")]
    EmptyAddress,

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider responded with status {0}")]
    Status(u16),

    #[error("response is not a candidate list: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("provider returned no candidates")]
    NoCandidates,

    #[error("best candidate has empty coordinates")]
    MissingCoordinates,
}
