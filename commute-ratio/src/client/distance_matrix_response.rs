use super::{DistanceMatrixError, DurationMatrix};
use serde::{Deserialize, Serialize};

/// top-level API status for a request denied because of the credential
const REQUEST_DENIED: &str = "REQUEST_DENIED";
const OK: &str = "OK";

/// body of a distance matrix response. fields are optional so that a body
/// with the wrong shape is reported as an API error rather than a JSON error.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DistanceMatrixResponse {
    pub status: Option<String>,
    pub error_message: Option<String>,
    pub rows: Option<Vec<ResponseRow>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ResponseRow {
    pub elements: Option<Vec<ResponseElement>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ResponseElement {
    pub status: Option<String>,
    pub duration: Option<ResponseValue>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ResponseValue {
    pub value: f64,
    pub text: Option<String>,
}

impl DistanceMatrixResponse {
    /// checks the API status and collects the durations. an element without a
    /// duration (no route, ZERO_RESULTS, NOT_FOUND) becomes 0 seconds.
    pub fn into_duration_matrix(self) -> Result<DurationMatrix, DistanceMatrixError> {
        let detail = self.error_message.unwrap_or_default();
        match self.status.as_deref() {
            Some(REQUEST_DENIED) => return Err(DistanceMatrixError::AuthError(detail)),
            Some(OK) | None => {}
            Some(other) => {
                return Err(DistanceMatrixError::ApiError(format!(
                    "status {other}: {detail}"
                )))
            }
        }
        let rows = self
            .rows
            .ok_or_else(|| DistanceMatrixError::ApiError(String::from("response has no `rows`")))?;
        let matrix = rows
            .into_iter()
            .enumerate()
            .map(|(idx, row)| {
                let elements = row.elements.ok_or_else(|| {
                    DistanceMatrixError::ApiError(format!("row {idx} has no `elements`"))
                })?;
                let durations = elements
                    .iter()
                    .map(|element| element.duration.as_ref().map_or(0.0, |d| d.value))
                    .collect::<Vec<_>>();
                Ok(durations)
            })
            .collect::<Result<Vec<_>, DistanceMatrixError>>()?;
        Ok(DurationMatrix::new(matrix))
    }
}

/// parses a response body into a duration matrix
pub fn parse_response_body(body: &str) -> Result<DurationMatrix, DistanceMatrixError> {
    let response: DistanceMatrixResponse = serde_json::from_str(body).map_err(|e| {
        let preview = body.chars().take(200).collect::<String>();
        DistanceMatrixError::ApiError(format!("body is not valid JSON ({e}): {preview}"))
    })?;
    response.into_duration_matrix()
}
