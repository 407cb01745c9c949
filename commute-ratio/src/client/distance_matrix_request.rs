use crate::model::{TravelMode, TripTime};

/// one distance matrix query: every origin against every destination
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrixRequest {
    /// "lat,lon" location strings
    pub origins: Vec<String>,
    /// "lat,lon" location strings
    pub destinations: Vec<String>,
    pub mode: TravelMode,
    pub trip_time: TripTime,
}

impl DistanceMatrixRequest {
    pub fn new(
        origins: Vec<String>,
        destinations: Vec<String>,
        mode: TravelMode,
        trip_time: TripTime,
    ) -> Self {
        Self {
            origins,
            destinations,
            mode,
            trip_time,
        }
    }

    /// query parameters for this request, excluding language and credential.
    /// locations are pipe-delimited; URL encoding is left to the HTTP client.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let (time_key, time_value) = self.trip_time.query_param();
        vec![
            ("origins", self.origins.join("|")),
            ("destinations", self.destinations.join("|")),
            ("mode", self.mode.as_str().to_string()),
            (time_key, time_value),
        ]
    }
}
