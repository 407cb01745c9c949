mod commute_parameters;
mod commute_ratio_row;
mod pipeline_ops;

pub use commute_parameters::CommuteParameters;
pub use commute_ratio_row::{CommuteRatioRow, ModeDurations};
pub use pipeline_ops::{batch_travel_times, compute_commute_ratios};
