use chrono::DateTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// which end of the trip the time parameter constrains
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimeReference {
    Arrival,
    Departure,
}

impl TimeReference {
    /// name of the distance matrix query parameter
    pub fn query_key(&self) -> &'static str {
        match self {
            TimeReference::Arrival => "arrival_time",
            TimeReference::Departure => "departure_time",
        }
    }
}

/// either the current time or a fixed instant in unix seconds.
///
/// parses from "now", an integer of unix seconds, or an RFC 3339 datetime
/// such as "2022-12-02T17:00:00-05:00".
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(try_from = "String", into = "String")]
pub enum TimeValue {
    #[default]
    Now,
    Timestamp(i64),
}

impl FromStr for TimeValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("now") {
            return Ok(TimeValue::Now);
        }
        if let Ok(seconds) = trimmed.parse::<i64>() {
            return Ok(TimeValue::Timestamp(seconds));
        }
        DateTime::parse_from_rfc3339(trimmed)
            .map(|datetime| TimeValue::Timestamp(datetime.timestamp()))
            .map_err(|e| {
                format!("time '{s}' must be 'now', unix seconds, or an RFC 3339 datetime: {e}")
            })
    }
}

impl TryFrom<String> for TimeValue {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeValue> for String {
    fn from(value: TimeValue) -> Self {
        value.to_string()
    }
}

impl Display for TimeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeValue::Now => write!(f, "now"),
            TimeValue::Timestamp(seconds) => write!(f, "{seconds}"),
        }
    }
}

/// the time parameter attached to every distance matrix request of a run
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TripTime {
    pub reference: TimeReference,
    pub at: TimeValue,
}

impl TripTime {
    pub fn new(reference: TimeReference, at: TimeValue) -> Self {
        Self { reference, at }
    }

    /// the (key, value) query parameter pair for this time
    pub fn query_param(&self) -> (&'static str, String) {
        (self.reference.query_key(), self.at.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{TimeReference, TimeValue, TripTime};

    #[test]
    fn test_parse_time_values() {
        assert_eq!("now".parse::<TimeValue>(), Ok(TimeValue::Now));
        assert_eq!(
            "1670018400".parse::<TimeValue>(),
            Ok(TimeValue::Timestamp(1670018400))
        );
        assert_eq!(
            "2022-12-02T17:00:00-05:00".parse::<TimeValue>(),
            Ok(TimeValue::Timestamp(1670018400))
        );
        assert!("tomorrow".parse::<TimeValue>().is_err());
    }

    #[test]
    fn test_query_param() {
        let trip_time = TripTime::new(TimeReference::Departure, TimeValue::Timestamp(1670018400));
        assert_eq!(
            trip_time.query_param(),
            ("departure_time", String::from("1670018400"))
        );
        let trip_time = TripTime::new(TimeReference::Arrival, TimeValue::Now);
        assert_eq!(trip_time.query_param(), ("arrival_time", String::from("now")));
    }
}
