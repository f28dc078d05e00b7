//! HTTP client for the remote correspondence-tracking API.
//!
//! This module provides a synchronous HTTP client that can be used from async
//! contexts via `tokio::task::spawn_blocking`. The client handles error
//! normalization and exposes the fixed set of named queries the remote
//! collection-of-records service supports.

mod async_wrapper;
pub use async_wrapper::{AsyncCourrierApi, AsyncCourrierApiImpl};

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::{Courrier, CourrierCreateRequest, CourrierType, Nature, Suivi,
    SuiviCreateRequest};
use crate::validation::Attachment;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the correspondence API.
///
/// Uses `ureq` for synchronous HTTP requests; async callers wrap it in
/// [`AsyncCourrierApiImpl`].
#[derive(Clone)]
pub struct CourrierApiClient {
    /// Base URL for the API
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl CourrierApiClient {
    /// Create a new client from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_base_url.clone(),
            agent: Arc::new(agent),
        }
    }

    /// Create a client with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            agent: Arc::new(agent),
        }
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request.
    fn get(&self, path: &str) -> Result<ureq::Response, ApiError> {
        let url = self.build_url(path);
        tracing::debug!("GET {}", url);

        self.agent
            .get(&url)
            .set("Content-Type", "application/json")
            .call()
            .map_err(|e| self.map_error(e))
    }

    /// Execute a POST request with a JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, ApiError> {
        let url = self.build_url(path);
        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        if let Err(e) = &result {
            tracing::error!("POST {} - Error: {:?}", url, e);
        }
        result
    }

    /// Execute a PUT request with a JSON body.
    fn put(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, ApiError> {
        let url = self.build_url(path);
        tracing::debug!("PUT {}", url);

        self.agent
            .put(&url)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e))
    }

    /// Execute a DELETE request.
    fn delete(&self, path: &str) -> Result<ureq::Response, ApiError> {
        let url = self.build_url(path);
        tracing::debug!("DELETE {}", url);

        self.agent
            .delete(&url)
            .set("Content-Type", "application/json")
            .call()
            .map_err(|e| self.map_error(e))
    }

    /// Map a ureq error into the normalized taxonomy.
    fn map_error(&self, error: ureq::Error) -> ApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    404 => ApiError::NotFound(message),
                    400 => {
                        // Surface the server's message when it sent one
                        let message = if message.trim().is_empty() {
                            "Invalid data".to_string()
                        } else {
                            message
                        };
                        ApiError::Invalid(message)
                    }
                    _ => ApiError::Api {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ApiError::TransportUnavailable
                } else if transport.kind() == ureq::ErrorKind::Io {
                    ApiError::Timeout
                } else {
                    ApiError::Http(transport.to_string())
                }
            }
        }
    }

    /// Read a response body and parse it as JSON.
    fn parse<T: serde::de::DeserializeOwned>(response: ureq::Response) -> ApiResult<T> {
        let body = response
            .into_string()
            .map_err(|e| ApiError::Http(e.to_string()))?;
        serde_json::from_str(&body).map_err(ApiError::Json)
    }

    // ========================= Courrier Operations =========================

    /// Retrieve the full courrier set.
    pub fn get_all_courriers(&self) -> ApiResult<Vec<Courrier>> {
        Self::parse(self.get("/courriers")?)
    }

    /// Get a single courrier by id.
    pub fn get_courrier(&self, id: i64) -> ApiResult<Courrier> {
        Self::parse(self.get(&format!("/courriers/{}", id))?)
    }

    /// Get a courrier by its unique reference number.
    pub fn get_courrier_by_num(&self, num: &str) -> ApiResult<Courrier> {
        Self::parse(self.get(&format!("/courriers/numero/{}", urlencoding::encode(num)))?)
    }

    /// Create a new courrier.
    pub fn create_courrier(&self, request: &CourrierCreateRequest) -> ApiResult<Courrier> {
        let body = serde_json::to_value(request).map_err(ApiError::Json)?;
        Self::parse(self.post("/courriers", &body)?)
    }

    /// Update an existing courrier.
    pub fn update_courrier(
        &self,
        id: i64,
        request: &CourrierCreateRequest,
    ) -> ApiResult<Courrier> {
        let body = serde_json::to_value(request).map_err(ApiError::Json)?;
        Self::parse(self.put(&format!("/courriers/{}", id), &body)?)
    }

    /// Delete a courrier. Attached suivis are cascade-deleted by the store.
    pub fn delete_courrier(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/courriers/{}", id))?;
        Ok(())
    }

    /// Query courriers by internal/external type.
    pub fn get_courriers_by_type(&self, type_: CourrierType) -> ApiResult<Vec<Courrier>> {
        Self::parse(self.get(&format!("/courriers/type/{}", type_.as_str()))?)
    }

    /// Query courriers by incoming/outgoing nature.
    pub fn get_courriers_by_nature(&self, nature: Nature) -> ApiResult<Vec<Courrier>> {
        Self::parse(self.get(&format!("/courriers/nature/{}", nature.as_str()))?)
    }

    /// Query courriers on an exact date.
    pub fn get_courriers_by_date(&self, date: &str) -> ApiResult<Vec<Courrier>> {
        Self::parse(self.get(&format!("/courriers/date/{}", urlencoding::encode(date)))?)
    }

    /// Query courriers in an inclusive date range.
    pub fn get_courriers_between_dates(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> ApiResult<Vec<Courrier>> {
        let path = format!(
            "/courriers/date-between?startDate={}&endDate={}",
            urlencoding::encode(start_date),
            urlencoding::encode(end_date)
        );
        Self::parse(self.get(&path)?)
    }

    /// Query courriers by recipient fragment.
    pub fn get_courriers_by_destinataire(&self, destinataire: &str) -> ApiResult<Vec<Courrier>> {
        Self::parse(self.get(&format!(
            "/courriers/destinataire/{}",
            urlencoding::encode(destinataire)
        ))?)
    }

    /// Query courriers by sender fragment.
    pub fn get_courriers_by_expediteur(&self, expediteur: &str) -> ApiResult<Vec<Courrier>> {
        Self::parse(self.get(&format!(
            "/courriers/expediteur/{}",
            urlencoding::encode(expediteur)
        ))?)
    }

    /// Query courriers whose subject contains a fragment.
    pub fn get_courriers_by_objet(&self, objet: &str) -> ApiResult<Vec<Courrier>> {
        Self::parse(self.get(&format!("/courriers/objet/{}", urlencoding::encode(objet)))?)
    }

    /// Check whether a reference number is already taken.
    pub fn exists_by_num(&self, num: &str) -> ApiResult<bool> {
        Self::parse(self.get(&format!(
            "/courriers/check/numero/{}",
            urlencoding::encode(num)
        ))?)
    }

    /// Upload an attachment for a courrier as a single multipart `file` part.
    ///
    /// The caller is expected to have validated type and size already; this
    /// method only performs the transfer.
    pub fn upload_pdf(&self, courrier_id: i64, attachment: &Attachment) -> ApiResult<Courrier> {
        let url = self.build_url(&format!("/courriers/{}/upload-pdf", courrier_id));
        tracing::info!(
            "Uploading attachment {} ({} bytes) for courrier {}",
            attachment.file_name,
            attachment.bytes.len(),
            courrier_id
        );

        let boundary = "----courrier-client-boundary";
        let mut body = Vec::with_capacity(attachment.bytes.len() + 256);
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
                 filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                attachment.file_name, attachment.media_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(&attachment.bytes);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        let response = self
            .agent
            .post(&url)
            .set(
                "Content-Type",
                &format!("multipart/form-data; boundary={boundary}"),
            )
            .send_bytes(&body)
            .map_err(|e| self.map_error(e))?;

        Self::parse(response)
    }

    // ========================= Suivi Operations =========================

    /// Retrieve all suivis across all courriers.
    pub fn get_all_suivis(&self) -> ApiResult<Vec<Suivi>> {
        Self::parse(self.get("/suivis")?)
    }

    /// Get a single suivi by id.
    pub fn get_suivi(&self, id: i64) -> ApiResult<Suivi> {
        Self::parse(self.get(&format!("/suivis/{}", id))?)
    }

    /// Get the suivis of a courrier, in creation order.
    pub fn get_suivis_by_courrier(&self, courrier_id: i64) -> ApiResult<Vec<Suivi>> {
        Self::parse(self.get(&format!("/courriers/{}/suivis", courrier_id))?)
    }

    /// Get the most recent suivi of a courrier.
    pub fn get_latest_suivi(&self, courrier_id: i64) -> ApiResult<Suivi> {
        Self::parse(self.get(&format!("/courriers/{}/suivis/latest", courrier_id))?)
    }

    /// Query suivis on an exact date.
    pub fn get_suivis_by_date(&self, date: &str) -> ApiResult<Vec<Suivi>> {
        Self::parse(self.get(&format!("/suivis/date/{}", urlencoding::encode(date)))?)
    }

    /// Query suivis in an inclusive date range.
    pub fn get_suivis_between_dates(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> ApiResult<Vec<Suivi>> {
        let path = format!(
            "/suivis/date-between?startDate={}&endDate={}",
            urlencoding::encode(start_date),
            urlencoding::encode(end_date)
        );
        Self::parse(self.get(&path)?)
    }

    /// Query suivis whose instruction contains a fragment.
    pub fn get_suivis_by_instruction(&self, instruction: &str) -> ApiResult<Vec<Suivi>> {
        Self::parse(self.get(&format!(
            "/suivis/instruction/{}",
            urlencoding::encode(instruction)
        ))?)
    }

    /// Create a suivi under a courrier.
    pub fn create_suivi(
        &self,
        courrier_id: i64,
        request: &SuiviCreateRequest,
    ) -> ApiResult<Suivi> {
        let body = serde_json::to_value(request).map_err(ApiError::Json)?;
        Self::parse(self.post(&format!("/courriers/{}/suivis", courrier_id), &body)?)
    }

    /// Update an existing suivi.
    pub fn update_suivi(&self, id: i64, request: &SuiviCreateRequest) -> ApiResult<Suivi> {
        let body = serde_json::to_value(request).map_err(ApiError::Json)?;
        Self::parse(self.put(&format!("/suivis/{}", id), &body)?)
    }

    /// Delete a suivi.
    pub fn delete_suivi(&self, id: i64) -> ApiResult<()> {
        self.delete(&format!("/suivis/{}", id))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = CourrierApiClient::with_base_url("https://api.example.com".to_string());

        assert_eq!(
            client.build_url("/courriers"),
            "https://api.example.com/courriers"
        );
        assert_eq!(
            client.build_url("courriers"),
            "https://api.example.com/courriers"
        );

        let client_with_slash =
            CourrierApiClient::with_base_url("https://api.example.com/".to_string());
        assert_eq!(
            client_with_slash.build_url("/courriers"),
            "https://api.example.com/courriers"
        );
    }

    #[test]
    fn test_client_creation() {
        let config = Config {
            api_base_url: "http://localhost:8081/api".to_string(),
            ..Config::default()
        };
        let client = CourrierApiClient::new(&config);
        assert_eq!(client.base_url, "http://localhost:8081/api");
    }
}
