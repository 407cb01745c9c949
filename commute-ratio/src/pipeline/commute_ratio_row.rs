use crate::{model::Area, ratio::transit_to_drive_ratio};

/// the driving and transit durations, in seconds, for one area
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModeDurations {
    pub driving: f64,
    pub transit: f64,
}

/// one output row: an area and its commute results. rows borrow their area
/// from the loaded area list rather than modifying it.
#[derive(Clone, Debug)]
pub struct CommuteRatioRow<'a> {
    pub area: &'a Area,
    pub driving_duration: f64,
    pub transit_duration: f64,
    pub transit_to_drive_ratio: f64,
}

impl<'a> CommuteRatioRow<'a> {
    pub fn new(area: &'a Area, durations: ModeDurations) -> Self {
        Self {
            area,
            driving_duration: durations.driving,
            transit_duration: durations.transit,
            transit_to_drive_ratio: transit_to_drive_ratio(durations.transit, durations.driving),
        }
    }
}
