use super::{CommuteDirection, TravelMode};
use crate::{client::DistanceMatrixError, export::ExportError, geometry::GeometryError};
use thiserror::Error;

/// errors that abort a commute ratio run. none of these are recovered from.
#[derive(Error, Debug)]
pub enum CommuteRatioError {
    #[error("invalid configuration: {0}")]
    ConfigError(String),
    #[error("failure loading areas: {source}")]
    GeometryError {
        #[from]
        source: GeometryError,
    },
    #[error("{direction} {mode} travel times failed for batch {batch_index}: {source}")]
    TravelTimeError {
        batch_index: usize,
        mode: TravelMode,
        direction: CommuteDirection,
        source: DistanceMatrixError,
    },
    #[error("failure exporting results: {source}")]
    ExportError {
        #[from]
        source: ExportError,
    },
}

#[cfg(test)]
mod tests {
    use super::CommuteRatioError;
    use crate::{
        client::DistanceMatrixError,
        model::{CommuteDirection, TravelMode},
    };

    #[test]
    fn test_travel_time_error_carries_context() {
        let err = CommuteRatioError::TravelTimeError {
            batch_index: 3,
            mode: TravelMode::Transit,
            direction: CommuteDirection::Outbound,
            source: DistanceMatrixError::AuthError(String::from("The provided API key is invalid.")),
        };
        let msg = err.to_string();
        assert!(msg.contains("outbound transit"));
        assert!(msg.contains("batch 3"));
        assert!(msg.contains("API key is invalid"));
    }
}
