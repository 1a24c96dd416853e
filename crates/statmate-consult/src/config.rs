use std::env;

use serde::{Deserialize, Serialize};

use crate::{prompt::Language, service::ConsultationError};

/// Environment variable read for the service API key unless configured otherwise.
pub const DEFAULT_API_KEY_VAR: &str = "API_KEY";

/// Settings for requests sent to the consultation service.
///
/// Every field is optional in serialized form and falls back to its default.
///
/// # Examples
///
/// ```
/// # use statmate_consult::{config::ConsultConfig, prompt::Language};
/// let config: ConsultConfig = serde_json::from_str(r#"{ "language": "en" }"#).unwrap();
/// assert_eq!(config.language, Language::En);
/// assert_eq!(config.model, "gemini-2.5-flash");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsultConfig {
    /// Model identifier passed to the service.
    pub model: String,
    /// Sampling temperature for free-form chat.
    pub chat_temperature: f32,
    /// Sampling temperature for one-shot analyses, kept low for numeric precision.
    pub analysis_temperature: f32,
    /// Response language.
    pub language: Language,
    /// Name of the environment variable holding the service API key.
    pub api_key_var: String,
}

impl Default for ConsultConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_owned(),
            chat_temperature: 0.7,
            analysis_temperature: 0.2,
            language: Language::default(),
            api_key_var: DEFAULT_API_KEY_VAR.to_owned(),
        }
    }
}

impl ConsultConfig {
    /// Reads the API key from the configured environment variable.
    ///
    /// An unset or blank variable is [`ConsultationError::MissingApiKey`]; a request
    /// must not reach the service without a key.
    pub fn api_key(&self) -> Result<String, ConsultationError> {
        resolve_api_key(env::var(&self.api_key_var).ok())
    }
}

fn resolve_api_key(value: Option<String>) -> Result<String, ConsultationError> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(key.trim().to_owned()),
        _ => Err(ConsultationError::MissingApiKey),
    }
}
