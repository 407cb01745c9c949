use crate::{
    batch::BatchSize,
    model::{CommuteDirection, CommuteHub, TripTime},
};

/// everything about a run that is shared by all of its batches
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CommuteParameters {
    pub direction: CommuteDirection,
    pub hub: CommuteHub,
    pub batch_size: BatchSize,
    pub trip_time: TripTime,
}
