mod commute_ratio_cli;
mod config_overrides;
mod run;

pub use commute_ratio_cli::{CommuteRatioCli, CommuteRatioOperation};
pub use config_overrides::ConfigOverrides;
pub use run::{run_commute_ratios, run_load_areas};
