//! Wire models for the translation service

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Language name for English
pub const ENGLISH: &str = "english";
/// Language name for Swahili
pub const SWAHILI: &str = "swahili";
/// Language name for Kinyarwanda
pub const KINYARWANDA: &str = "kinyarwanda";

/// Ordered list of language identifiers reported by the service
pub type LanguageList = Vec<String>;

/// Body of a successful `/health` response, kept exactly as the service sent it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthStatus(Map<String, Value>);

impl HealthStatus {
    /// Service-reported status, when it is a string
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    /// Check whether the service reports itself healthy
    pub fn is_healthy(&self) -> bool {
        self.status() == Some("healthy")
    }

    /// Raw field lookup
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The full response object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Take the response object
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for HealthStatus {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Body of a successful `/languages` response
#[derive(Debug, Default, Deserialize)]
pub(crate) struct LanguagesResponse {
    #[serde(default)]
    pub supported_languages: Vec<Value>,
}

impl LanguagesResponse {
    /// Entries in service order; non-string entries keep their JSON text
    pub fn into_languages(self) -> LanguageList {
        self.supported_languages
            .into_iter()
            .map(|entry| match entry {
                Value::String(name) => name,
                other => other.to_string(),
            })
            .collect()
    }
}

/// Error body of a failed response
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}

/// Translation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,
    /// Language of `text`
    pub source_language: String,
    /// Language to translate into
    pub target_language: String,
}

impl TranslationRequest {
    /// Build a request
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}

/// Translation result, kept exactly as the service sent it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationResult(Map<String, Value>);

impl TranslationResult {
    /// `translated_text`, when it is a string
    pub fn translated_text(&self) -> Option<&str> {
        self.0.get("translated_text").and_then(Value::as_str)
    }

    /// Translated text, falling back to a `translation` field
    pub fn text(&self) -> Option<&str> {
        self.translated_text()
            .or_else(|| self.0.get("translation").and_then(Value::as_str))
    }

    /// Raw field lookup
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The full response object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Take the response object
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for TranslationResult {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
