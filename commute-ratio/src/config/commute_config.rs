use crate::{
    batch::{BatchSize, MAX_BATCH_SIZE},
    model::{CommuteDirection, CommuteHub, CommuteRatioError, TimeReference, TimeValue, TripTime},
    pipeline::CommuteParameters,
};
use serde::{Deserialize, Serialize};

/// the `[commute]` section: which way trips go, where the hub is, and when
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct CommuteConfig {
    pub direction: CommuteDirection,
    /// "latitude,longitude" of the commute hub
    pub hub: String,
    #[serde(default = "CommuteConfig::default_batch_size")]
    pub batch_size: usize,
    #[serde(default)]
    pub trip_time: TripTimeConfig,
}

/// the `[commute.trip_time]` section. when `reference` is omitted, inbound
/// runs constrain arrival and outbound runs constrain departure.
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct TripTimeConfig {
    #[serde(default)]
    pub reference: Option<TimeReference>,
    #[serde(default)]
    pub at: TimeValue,
}

impl CommuteConfig {
    fn default_batch_size() -> usize {
        MAX_BATCH_SIZE
    }

    /// validates this section into the parameters shared by every batch
    pub fn commute_parameters(&self) -> Result<CommuteParameters, CommuteRatioError> {
        let hub = self
            .hub
            .parse::<CommuteHub>()
            .map_err(CommuteRatioError::ConfigError)?;
        let batch_size =
            BatchSize::try_from(self.batch_size).map_err(CommuteRatioError::ConfigError)?;
        let reference = self
            .trip_time
            .reference
            .unwrap_or_else(|| self.direction.default_time_reference());
        Ok(CommuteParameters {
            direction: self.direction,
            hub,
            batch_size,
            trip_time: TripTime::new(reference, self.trip_time.at),
        })
    }
}
