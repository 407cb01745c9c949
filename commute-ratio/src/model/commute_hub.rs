use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// formats a coordinate as the "latitude,longitude" location string
/// accepted by the distance matrix API.
pub fn location_string(latitude: f64, longitude: f64) -> String {
    format!("{latitude},{longitude}")
}

/// the fixed point that every trip of a run starts from or ends at.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(try_from = "String", into = "String")]
pub struct CommuteHub {
    pub latitude: f64,
    pub longitude: f64,
}

impl CommuteHub {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(format!("hub latitude {latitude} outside of [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(format!("hub longitude {longitude} outside of [-180, 180]"));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn location_string(&self) -> String {
        location_string(self.latitude, self.longitude)
    }
}

impl FromStr for CommuteHub {
    type Err = String;

    /// parses a "latitude,longitude" string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat_str, lon_str) = s
            .split_once(',')
            .ok_or_else(|| format!("commute hub '{s}' must be formatted as 'lat,lon'"))?;
        let latitude = lat_str
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid hub latitude '{lat_str}': {e}"))?;
        let longitude = lon_str
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid hub longitude '{lon_str}': {e}"))?;
        CommuteHub::new(latitude, longitude)
    }
}

impl TryFrom<String> for CommuteHub {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CommuteHub> for String {
    fn from(value: CommuteHub) -> Self {
        value.location_string()
    }
}

impl Display for CommuteHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.location_string())
    }
}
