use super::CommuteConfig;
use crate::{
    client::DistanceMatrixConfig, geometry::AreasConfig, model::CommuteRatioError,
    pipeline::CommuteParameters,
};
use ::config::{Config, File, FileFormat, Source};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// environment variable holding the distance matrix API key. takes
/// precedence over `api_key` in the configuration file.
pub const API_KEY_ENV_VAR: &str = "DISTANCE_MATRIX_API_KEY";

/// a full commute ratio run, read from a TOML or JSON file
#[derive(Clone, Serialize, Deserialize)]
pub struct CommuteRatioConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    /// output path without extension. `.csv` and `.shp` are appended.
    pub output_stem: String,
    pub areas: AreasConfig,
    pub commute: CommuteConfig,
    #[serde(default)]
    pub distance_matrix: DistanceMatrixConfig,
}

impl CommuteRatioConfig {
    /// reads a configuration file, choosing the format from its extension
    pub fn from_file(path: &Path) -> Result<Self, CommuteRatioError> {
        if !path.is_file() {
            return Err(CommuteRatioError::ConfigError(format!(
                "configuration file {path:?} does not exist"
            )));
        }
        Self::from_source(File::from(path), &format!("{path:?}"))
    }

    pub fn from_contents(contents: &str, format: FileFormat) -> Result<Self, CommuteRatioError> {
        Self::from_source(File::from_str(contents, format), "inline configuration")
    }

    fn from_source<S>(source: S, description: &str) -> Result<Self, CommuteRatioError>
    where
        S: Source + Send + Sync + 'static,
    {
        let config = Config::builder().add_source(source).build().map_err(|e| {
            CommuteRatioError::ConfigError(format!("failed reading {description}: {e}"))
        })?;
        config.try_deserialize::<Self>().map_err(|e| {
            CommuteRatioError::ConfigError(format!("failed deserializing {description}: {e}"))
        })
    }

    pub fn commute_parameters(&self) -> Result<CommuteParameters, CommuteRatioError> {
        self.commute.commute_parameters()
    }

    pub fn output_stem(&self) -> PathBuf {
        PathBuf::from(&self.output_stem)
    }

    /// the API key from the environment, falling back to the file
    pub fn api_key(&self) -> Result<String, CommuteRatioError> {
        resolve_api_key(
            std::env::var(API_KEY_ENV_VAR).ok(),
            self.api_key.as_deref(),
        )
    }
}

fn resolve_api_key(
    from_env: Option<String>,
    from_file: Option<&str>,
) -> Result<String, CommuteRatioError> {
    from_env
        .filter(|key| !key.trim().is_empty())
        .or_else(|| {
            from_file
                .filter(|key| !key.trim().is_empty())
                .map(String::from)
        })
        .ok_or_else(|| {
            CommuteRatioError::ConfigError(format!(
                "no distance matrix API key, set {API_KEY_ENV_VAR} or `api_key` in the configuration"
            ))
        })
}
