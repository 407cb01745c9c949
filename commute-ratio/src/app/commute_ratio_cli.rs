use super::ConfigOverrides;
use crate::{config::CommuteRatioConfig, model::CommuteRatioError};
use clap::{Parser, Subcommand};
use std::{fmt::Display, path::Path};

/// command line tool computing transit-to-driving commute time ratios for
/// census areas around a commute hub
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CommuteRatioCli {
    /// select the operation to run
    #[command(subcommand)]
    pub op: CommuteRatioOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum CommuteRatioOperation {
    /// loads areas, queries driving and transit times in batches, and
    /// writes `<output_stem>.csv` and `<output_stem>.shp`
    Run {
        /// TOML or JSON run configuration
        #[arg(short, long)]
        config: String,
        #[command(flatten)]
        overrides: ConfigOverrides,
    },
    /// loads areas and their centroids only, writing `<output_stem>_areas.csv`.
    /// makes no distance matrix requests.
    Areas {
        /// TOML or JSON run configuration
        #[arg(short, long)]
        config: String,
        #[command(flatten)]
        overrides: ConfigOverrides,
    },
}

impl CommuteRatioOperation {
    pub fn run(&self) -> Result<(), CommuteRatioError> {
        match self {
            CommuteRatioOperation::Run { config, overrides } => {
                let config = read_config(config, overrides)?;
                super::run_commute_ratios(&config)
            }
            CommuteRatioOperation::Areas { config, overrides } => {
                let config = read_config(config, overrides)?;
                super::run_load_areas(&config)
            }
        }
    }
}

impl Display for CommuteRatioOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommuteRatioOperation::Run { config, .. } => write!(f, "commute ratio run for {config}"),
            CommuteRatioOperation::Areas { config, .. } => write!(f, "area listing for {config}"),
        }
    }
}

fn read_config(
    path: &str,
    overrides: &ConfigOverrides,
) -> Result<CommuteRatioConfig, CommuteRatioError> {
    let mut config = CommuteRatioConfig::from_file(Path::new(path))?;
    overrides.apply(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{CommuteRatioCli, CommuteRatioOperation};
    use crate::model::CommuteDirection;
    use clap::{CommandFactory, Parser};

    #[test]
    fn test_cli_definition() {
        CommuteRatioCli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_with_overrides() {
        let cli = CommuteRatioCli::try_parse_from([
            "commute_ratio",
            "run",
            "--config",
            "config/toronto.toml",
            "--direction",
            "outbound",
            "--batch-size",
            "10",
        ])
        .expect("should parse");
        match cli.op {
            CommuteRatioOperation::Run { config, overrides } => {
                assert_eq!(config, "config/toronto.toml");
                assert_eq!(overrides.direction, Some(CommuteDirection::Outbound));
                assert_eq!(overrides.batch_size, Some(10));
                assert_eq!(overrides.max_areas, None);
            }
            other => panic!("expected run, found {other:?}"),
        }
    }

    #[test]
    fn test_operation_display_names_config() {
        let cli = CommuteRatioCli::try_parse_from([
            "commute_ratio",
            "areas",
            "--config",
            "config/toronto.toml",
        ])
        .expect("should parse");
        assert_eq!(cli.op.to_string(), "area listing for config/toronto.toml");
    }

    #[test]
    fn test_unknown_direction_rejected() {
        let result = CommuteRatioCli::try_parse_from([
            "commute_ratio",
            "areas",
            "--config",
            "config/toronto.toml",
            "--direction",
            "sideways",
        ]);
        assert!(result.is_err());
    }
}
