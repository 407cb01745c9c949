use crate::{config::CommuteRatioConfig, model::CommuteDirection};
use clap::Args;

/// command line values replacing their counterparts in the configuration file
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// inbound (areas to hub) or outbound (hub to areas)
    #[arg(long, value_enum)]
    pub direction: Option<CommuteDirection>,
    /// areas per distance matrix request, 1 to 25
    #[arg(long)]
    pub batch_size: Option<usize>,
    /// keep only the first n contained areas
    #[arg(long)]
    pub max_areas: Option<usize>,
    /// output path without extension
    #[arg(long)]
    pub output_stem: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut CommuteRatioConfig) {
        if let Some(direction) = self.direction {
            config.commute.direction = direction;
        }
        if let Some(batch_size) = self.batch_size {
            config.commute.batch_size = batch_size;
        }
        if let Some(max_areas) = self.max_areas {
            config.areas.max_areas = Some(max_areas);
        }
        if let Some(output_stem) = &self.output_stem {
            config.output_stem = output_stem.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigOverrides;
    use crate::{config::CommuteRatioConfig, model::CommuteDirection};
    use ::config::FileFormat;

    #[test]
    fn test_overrides_replace_file_values() {
        let toml = r#"
output_stem = "output/toronto"

[areas]
area_file = "areas.shp"
boundary_file = "boundaries.shp"
municipality_name = "Toronto"

[commute]
direction = "inbound"
hub = "43.645570,-79.380851"
batch_size = 20
"#;
        let mut config = CommuteRatioConfig::from_contents(toml, FileFormat::Toml).expect("valid");
        ConfigOverrides::default().apply(&mut config);
        assert_eq!(config.commute.batch_size, 20);
        assert_eq!(config.areas.max_areas, None);

        let overrides = ConfigOverrides {
            direction: Some(CommuteDirection::Outbound),
            batch_size: Some(26),
            max_areas: Some(5),
            output_stem: Some(String::from("output/toronto_outbound")),
        };
        overrides.apply(&mut config);
        assert_eq!(config.commute.direction, CommuteDirection::Outbound);
        assert_eq!(config.areas.max_areas, Some(5));
        assert_eq!(config.output_stem, "output/toronto_outbound");
        // overridden values are validated like file values
        assert!(config.commute_parameters().is_err());
    }
}
