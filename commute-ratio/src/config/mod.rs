//! run configuration read from a TOML or JSON file.
mod commute_config;
mod commute_ratio_config;

pub use commute_config::{CommuteConfig, TripTimeConfig};
pub use commute_ratio_config::{CommuteRatioConfig, API_KEY_ENV_VAR};
