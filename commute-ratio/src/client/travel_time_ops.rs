//! the two request shapes used for commute travel times.
use super::{DistanceMatrixError, DistanceMatrixRequest, TravelTimeSource};
use crate::model::{TravelMode, TripTime};

/// many origins against one or more destinations ("inbound"). returns one
/// duration per origin: the mean over that origin's row, which is simply the
/// single value when there is one destination.
pub fn travel_time_per_origin<S: TravelTimeSource + ?Sized>(
    source: &S,
    origins: Vec<String>,
    destinations: Vec<String>,
    mode: TravelMode,
    trip_time: TripTime,
) -> Result<Vec<f64>, DistanceMatrixError> {
    let (n_origins, n_destinations) = (origins.len(), destinations.len());
    let request = DistanceMatrixRequest::new(origins, destinations, mode, trip_time);
    let matrix = source.duration_matrix(&request)?;
    matrix.check_shape(n_origins, n_destinations)?;
    Ok(matrix.row_means())
}

/// one origin against many destinations ("outbound"). returns the origin's
/// row so that `result[i]` is the duration to `destinations[i]`. this relies
/// on the API answering in request order, which is checked as far as the
/// response allows: the matrix must be exactly 1 x destinations.
pub fn travel_time_per_destination<S: TravelTimeSource + ?Sized>(
    source: &S,
    origin: String,
    destinations: Vec<String>,
    mode: TravelMode,
    trip_time: TripTime,
) -> Result<Vec<f64>, DistanceMatrixError> {
    let n_destinations = destinations.len();
    let request = DistanceMatrixRequest::new(vec![origin], destinations, mode, trip_time);
    let matrix = source.duration_matrix(&request)?;
    matrix.check_shape(1, n_destinations)?;
    matrix.into_first_row().ok_or_else(|| {
        DistanceMatrixError::MalformedResponseError(String::from("response has no origin row"))
    })
}
