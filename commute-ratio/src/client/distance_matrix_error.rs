use thiserror::Error;

#[derive(Error, Debug)]
pub enum DistanceMatrixError {
    #[error("failure sending distance matrix request: {source}")]
    NetworkError { source: reqwest::Error },
    #[error("distance matrix API rejected the credential: {0}")]
    AuthError(String),
    #[error("unexpected distance matrix response: {0}")]
    ApiError(String),
    #[error("distance matrix response does not match the request: {0}")]
    MalformedResponseError(String),
}

impl DistanceMatrixError {
    /// only transport failures are worth repeating; anything the API said
    /// will be said again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DistanceMatrixError::NetworkError { .. })
    }
}

/// the request URL is dropped because its query string carries the API key
impl From<reqwest::Error> for DistanceMatrixError {
    fn from(value: reqwest::Error) -> Self {
        DistanceMatrixError::NetworkError {
            source: value.without_url(),
        }
    }
}
