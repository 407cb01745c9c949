use serde::{Deserialize, Serialize};

/// Google Distance Matrix JSON endpoint
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

/// connection settings for the distance matrix API. the credential is kept
/// out of this struct and handed to the client directly.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct DistanceMatrixConfig {
    #[serde(default = "DistanceMatrixConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "DistanceMatrixConfig::default_language")]
    pub language: String,
    /// per-request timeout
    #[serde(default = "DistanceMatrixConfig::default_timeout_secs")]
    pub timeout_secs: u64,
    /// additional attempts after a transport failure
    #[serde(default)]
    pub max_retries: u32,
    /// wait before the first retry, doubled on each further retry
    #[serde(default = "DistanceMatrixConfig::default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

impl Default for DistanceMatrixConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            language: Self::default_language(),
            timeout_secs: Self::default_timeout_secs(),
            max_retries: 0,
            retry_backoff_ms: Self::default_retry_backoff_ms(),
        }
    }
}

impl DistanceMatrixConfig {
    fn default_base_url() -> String {
        String::from(DEFAULT_BASE_URL)
    }

    fn default_language() -> String {
        String::from("en-EN")
    }

    fn default_timeout_secs() -> u64 {
        30
    }

    fn default_retry_backoff_ms() -> u64 {
        1000
    }
}
