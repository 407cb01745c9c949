//! client for a distance matrix API speaking the Google Distance Matrix wire
//! format, plus the two request shapes a commute ratio run needs.
mod distance_matrix_client;
mod distance_matrix_config;
mod distance_matrix_error;
mod distance_matrix_request;
mod distance_matrix_response;
mod duration_matrix;
mod travel_time_source;

pub mod travel_time_ops;

pub use distance_matrix_client::DistanceMatrixClient;
pub use distance_matrix_config::DistanceMatrixConfig;
pub use distance_matrix_error::DistanceMatrixError;
pub use distance_matrix_request::DistanceMatrixRequest;
pub use distance_matrix_response::{parse_response_body, DistanceMatrixResponse};
pub use duration_matrix::DurationMatrix;
pub use travel_time_source::TravelTimeSource;
