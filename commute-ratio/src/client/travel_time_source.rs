use super::{DistanceMatrixError, DistanceMatrixRequest, DurationMatrix};

/// anything that can answer a distance matrix request. the HTTP client is the
/// production implementation; tests substitute canned matrices.
pub trait TravelTimeSource {
    fn duration_matrix(
        &self,
        request: &DistanceMatrixRequest,
    ) -> Result<DurationMatrix, DistanceMatrixError>;
}
