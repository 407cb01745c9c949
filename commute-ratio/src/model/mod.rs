mod area;
mod attribute_value;
mod commute_direction;
mod commute_hub;
mod commute_ratio_error;
mod travel_mode;
mod trip_time;

pub use area::Area;
pub use attribute_value::AttributeValue;
pub use commute_direction::CommuteDirection;
pub use commute_hub::{location_string, CommuteHub};
pub use commute_ratio_error::CommuteRatioError;
pub use travel_mode::TravelMode;
pub use trip_time::{TimeReference, TimeValue, TripTime};
