//! Gemini API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, GeminiApiConfig, LanguageConfig};
use crate::ports::{PolishedPrompt, TextEnhancer};
use crate::services::InstructionSet;

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";
const DEFAULT_STATUS_MESSAGE: &str = "Gemini API request failed";

/// HTTP transport for the Gemini `generateContent` API.
///
/// This client performs a single request per call. Retry behavior is
/// implemented by a dedicated retry wrapper adapter.
pub struct GeminiTextEnhancer {
    api_key: String,
    api_url: Url,
    model: String,
    languages: LanguageConfig,
    instructions: InstructionSet,
    client: Client,
}

impl std::fmt::Debug for GeminiTextEnhancer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiTextEnhancer")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl GeminiTextEnhancer {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(
        api_key: String,
        config: &GeminiApiConfig,
        languages: LanguageConfig,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::EnhancerApi {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            languages,
            instructions: InstructionSet::new()?,
            client,
        })
    }

    /// Create from the `GEMINI_API_KEY` environment variable.
    pub fn from_env(config: &GeminiApiConfig, languages: LanguageConfig) -> Result<Self, AppError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| AppError::EnvironmentVariableMissing("GEMINI_API_KEY".into()))?;
        Self::new(api_key, config, languages)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_url.as_str().trim_end_matches('/'),
            self.model
        )
    }

    fn generate(
        &self,
        system_instruction: String,
        user_text: &str,
        generation_config: Option<GenerationConfig>,
    ) -> Result<String, AppError> {
        let request = ApiRequest {
            system_instruction: ContentBlock::text(system_instruction),
            contents: vec![ContentBlock::text(user_text.to_string())],
            generation_config,
        };

        let response = self
            .client
            .post(self.endpoint())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| AppError::EnhancerApi {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if !status.is_success() {
            let message = extract_error_message(&body_text).unwrap_or_else(|| {
                if !body_text.trim().is_empty() {
                    body_text.clone()
                } else if status.as_u16() == 429 {
                    "Rate limited".to_string()
                } else if status.is_server_error() {
                    "Server error".to_string()
                } else {
                    DEFAULT_STATUS_MESSAGE.to_string()
                }
            });
            return Err(AppError::EnhancerApi { message, status: Some(status.as_u16()) });
        }

        let api_response: ApiResponse =
            serde_json::from_str(&body_text).map_err(|e| AppError::EnhancerApi {
                message: format!("Failed to parse response: {}", e),
                status: Some(status.as_u16()),
            })?;

        let text = api_response
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::EnhancerApi {
                message: "No candidate text in response".into(),
                status: Some(status.as_u16()),
            });
        }

        Ok(text)
    }
}

impl TextEnhancer for GeminiTextEnhancer {
    fn enrich(&self, idea: &str) -> Result<String, AppError> {
        let instruction = self.instructions.enrich()?;
        Ok(self.generate(instruction, idea, None)?.trim().to_string())
    }

    fn polish(&self, body: &str) -> Result<PolishedPrompt, AppError> {
        let instruction = self.instructions.polish(&self.languages)?;
        let text = self.generate(instruction, body, Some(GenerationConfig::polish_schema()))?;

        let payload: PolishedPayload =
            serde_json::from_str(text.trim()).map_err(|e| AppError::EnhancerApi {
                message: format!("Polish response is not the expected JSON object: {}", e),
                status: None,
            })?;

        Ok(PolishedPrompt { primary: payload.primary, secondary: payload.secondary })
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: ContentBlock,
    contents: Vec<ContentBlock>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContentBlock {
    parts: Vec<ContentPart>,
}

impl ContentBlock {
    fn text(text: String) -> Self {
        Self { parts: vec![ContentPart { text: Some(text) }] }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

impl GenerationConfig {
    /// Schema forcing the bilingual object shape on the polish response.
    fn polish_schema() -> Self {
        Self {
            response_mime_type: "application/json",
            response_schema: serde_json::json!({
                "type": "OBJECT",
                "properties": {
                    "primary": { "type": "STRING" },
                    "secondary": { "type": "STRING" },
                },
                "required": ["primary", "secondary"],
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentBlock,
}

#[derive(Debug, Deserialize)]
struct PolishedPayload {
    primary: String,
    secondary: String,
}

fn extract_error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: ErrorDetail,
    }
    #[derive(Deserialize)]
    struct ErrorDetail {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error.message)
}
