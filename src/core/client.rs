//! Async client for the translation service REST API

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::core::config::ClientConfig;
use crate::core::errors::{Result, TranslationError, UNKNOWN_ERROR};
use crate::core::models::{
    ErrorBody, HealthStatus, LanguageList, LanguagesResponse, TranslationRequest,
    TranslationResult, ENGLISH, KINYARWANDA, SWAHILI,
};

/// Timeout for `/health` and `/languages`
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for `/translate`
pub const TRANSLATE_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the health, languages and translate endpoints.
///
/// Every method performs exactly one request. `health_check` and
/// `get_supported_languages` never fail: any problem collapses into `None`
/// or an empty list. `translate` and its wrappers report failures as
/// [`TranslationError::TransportError`] or [`TranslationError::ApiError`].
#[derive(Debug, Clone)]
pub struct TranslationClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl TranslationClient {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url))
    }

    /// Create a client from an existing configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        // No idle connections are kept, so each call releases its socket.
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| TranslationError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    /// Normalized base URL
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Query `/health`. Returns `None` on a non-200 status, a transport
    /// failure or an unparseable body.
    pub async fn health_check(&self) -> Option<HealthStatus> {
        match self.get_json::<HealthStatus>("/health").await {
            Ok(health) => Some(health),
            Err(e) => {
                warn!("Health check failed: {}", e);
                None
            }
        }
    }

    /// Query `/languages`. Returns an empty list on any failure or when the
    /// body has no `supported_languages` field.
    pub async fn get_supported_languages(&self) -> LanguageList {
        match self.get_json::<LanguagesResponse>("/languages").await {
            Ok(parsed) => parsed.into_languages(),
            Err(e) => {
                warn!("Listing supported languages failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Translate `text` from `source_language` into `target_language`
    pub async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<TranslationResult> {
        self.send(&TranslationRequest::new(text, source_language, target_language))
            .await
    }

    /// POST a prepared request to `/translate`
    pub async fn send(&self, request: &TranslationRequest) -> Result<TranslationResult> {
        let url = self.config.endpoint("/translate");
        debug!(
            "POST {} ({} -> {}, {} chars)",
            url,
            request.source_language,
            request.target_language,
            request.text.chars().count()
        );

        let response = self
            .client
            .post(&url)
            .timeout(TRANSLATE_TIMEOUT)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            let err = api_error(status, &body);
            warn!("Translation request rejected: {}", err);
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|e| TranslationError::InvalidResponse {
            message: format!("translate response is not a JSON object: {}", e),
        })
    }

    /// Translate into Swahili; the source defaults to English
    pub async fn translate_to_swahili(
        &self,
        text: &str,
        source_language: Option<&str>,
    ) -> Result<TranslationResult> {
        self.translate(text, source_language.unwrap_or(ENGLISH), SWAHILI)
            .await
    }

    /// Translate into Kinyarwanda; the source defaults to English
    pub async fn translate_to_kinyarwanda(
        &self,
        text: &str,
        source_language: Option<&str>,
    ) -> Result<TranslationResult> {
        self.translate(text, source_language.unwrap_or(ENGLISH), KINYARWANDA)
            .await
    }

    /// Translate from Swahili; the target defaults to English
    pub async fn translate_from_swahili(
        &self,
        text: &str,
        target_language: Option<&str>,
    ) -> Result<TranslationResult> {
        self.translate(text, SWAHILI, target_language.unwrap_or(ENGLISH))
            .await
    }

    /// Translate from Kinyarwanda; the target defaults to English
    pub async fn translate_from_kinyarwanda(
        &self,
        text: &str,
        target_language: Option<&str>,
    ) -> Result<TranslationResult> {
        self.translate(text, KINYARWANDA, target_language.unwrap_or(ENGLISH))
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.endpoint(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).timeout(QUERY_TIMEOUT).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(api_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| TranslationError::InvalidResponse {
            message: format!("{} returned unparseable JSON: {}", path, e),
        })
    }
}

fn api_error(status: StatusCode, body: &str) -> TranslationError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string());

    TranslationError::ApiError {
        status: status.as_u16(),
        message,
    }
}
