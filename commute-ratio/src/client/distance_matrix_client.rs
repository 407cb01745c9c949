use super::{
    parse_response_body, DistanceMatrixConfig, DistanceMatrixError, DistanceMatrixRequest,
    DurationMatrix, TravelTimeSource,
};
use reqwest::{blocking::Client, StatusCode};
use std::time::Duration;

/// blocking HTTP client for the distance matrix API. one call issues one GET.
pub struct DistanceMatrixClient {
    http: Client,
    api_key: String,
    base_url: String,
    language: String,
    max_retries: u32,
    retry_backoff: Duration,
}

impl DistanceMatrixClient {
    pub fn new(
        api_key: impl Into<String>,
        config: &DistanceMatrixConfig,
    ) -> Result<Self, DistanceMatrixError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: config.base_url.clone(),
            language: config.language.clone(),
            max_retries: config.max_retries,
            retry_backoff: Duration::from_millis(config.retry_backoff_ms),
        })
    }

    fn send(&self, request: &DistanceMatrixRequest) -> Result<DurationMatrix, DistanceMatrixError> {
        let mut query = request.query_params();
        query.push(("language", self.language.clone()));
        log::debug!(
            "GET {} mode={} origins={} destinations={}",
            self.base_url,
            request.mode,
            request.origins.len(),
            request.destinations.len()
        );
        query.push(("key", self.api_key.clone()));

        let response = self.http.get(&self.base_url).query(&query).send()?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().unwrap_or_default();
            return Err(DistanceMatrixError::AuthError(format!("HTTP {status}: {body}")));
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(DistanceMatrixError::ApiError(format!("HTTP {status}: {body}")));
        }
        let body = response.text()?;
        parse_response_body(&body)
    }
}

impl TravelTimeSource for DistanceMatrixClient {
    /// sends the request, retrying transport failures up to `max_retries`
    /// times with doubling backoff.
    fn duration_matrix(
        &self,
        request: &DistanceMatrixRequest,
    ) -> Result<DurationMatrix, DistanceMatrixError> {
        let mut attempt = 0;
        let mut backoff = self.retry_backoff;
        loop {
            match self.send(request) {
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    log::warn!(
                        "distance matrix request failed ({e}), retry {attempt}/{} in {backoff:?}",
                        self.max_retries
                    );
                    std::thread::sleep(backoff);
                    backoff *= 2;
                }
                result => return result,
            }
        }
    }
}
