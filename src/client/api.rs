//! reqwest-backed client for the intake API.

use std::future::Future;

use url::Url;

use super::config::ApiConfig;
use crate::core::{IntakeError, RegistrationRecord, RegistrationSink, SubmitError};

/// Client posting registration records to the intake API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ApiClient {
    /// Create a client for the endpoint described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::Config` if the endpoint URL cannot be built or
    /// the HTTP client fails to initialize.
    pub fn new(config: &ApiConfig) -> Result<Self, IntakeError> {
        let endpoint = config.endpoint()?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| IntakeError::Config(format!("HTTP client: {e}")))?;
        Ok(Self { http, endpoint })
    }

    /// URL records are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST `record` as JSON. Any 2xx status is success; the response body
    /// is ignored.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Encode` if the record cannot be serialized,
    /// `SubmitError::Network` on connection issues, and
    /// `SubmitError::Status` for any non-2xx answer.
    pub async fn post_record(&self, record: &RegistrationRecord) -> Result<(), SubmitError> {
        let body = serde_json::to_vec(record).map_err(|e| SubmitError::Encode(e.to_string()))?;
        tracing::debug!(endpoint = %self.endpoint, bytes = body.len(), "posting registration");

        let resp = self
            .http
            .post(self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(endpoint = %self.endpoint, error = %e, "registration request failed");
                SubmitError::Network(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(%status, "registration rejected by API");
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(%status, "registration accepted");
        Ok(())
    }
}

impl RegistrationSink for ApiClient {
    fn submit(
        &self,
        record: &RegistrationRecord,
    ) -> impl Future<Output = Result<(), SubmitError>> + Send {
        self.post_record(record)
    }
}
