use super::TimeReference;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// whether trips end at the commute hub (inbound) or start there (outbound).
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommuteDirection {
    /// areas are origins, the hub is the destination
    Inbound,
    /// the hub is the origin, areas are destinations
    Outbound,
}

impl CommuteDirection {
    /// inbound commutes are planned around an arrival time at the hub,
    /// outbound commutes around a departure time from it.
    pub fn default_time_reference(&self) -> TimeReference {
        match self {
            CommuteDirection::Inbound => TimeReference::Arrival,
            CommuteDirection::Outbound => TimeReference::Departure,
        }
    }
}

impl Display for CommuteDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommuteDirection::Inbound => write!(f, "inbound"),
            CommuteDirection::Outbound => write!(f, "outbound"),
        }
    }
}
