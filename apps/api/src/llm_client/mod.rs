/// LLM Client — the single point of entry for all Cohere API calls in Saathi.
///
/// ARCHITECTURAL RULE: No other module may call the generation API directly.
/// All model interactions MUST go through the `TextGenerator` seam.
///
/// Model: command (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const COHERE_API_URL: &str = "https://api.cohere.ai/v1/generate";
/// The model used for all generation calls in Saathi.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "command";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Model returned empty content")]
    EmptyContent,
}

/// Per-feature generation parameters. Each feature declares its own constant
/// next to its prompt templates; temperature is 0.7 across the board.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub stop_sequences: &'static [&'static str],
}

impl GenerationParams {
    pub const fn new(max_tokens: u32) -> Self {
        GenerationParams {
            max_tokens,
            temperature: 0.7,
            stop_sequences: &[],
        }
    }

    pub const fn with_stop(max_tokens: u32, stop_sequences: &'static [&'static str]) -> Self {
        GenerationParams {
            max_tokens,
            temperature: 0.7,
            stop_sequences,
        }
    }
}

/// The generation seam. Handlers depend on this trait, never on the vendor
/// client, so tests can swap in a canned generator.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends one prompt to the generation service and returns the raw
    /// generated text. One attempt per request; failures are terminal.
    async fn generate(&self, prompt: &str, params: &GenerationParams)
        -> Result<String, GenerateError>;
}

#[derive(Debug, Serialize)]
struct CohereRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
    k: u32,
    stop_sequences: &'a [&'a str],
    return_likelihoods: &'a str,
}

#[derive(Debug, Deserialize)]
struct CohereResponse {
    generations: Vec<Generation>,
}

#[derive(Debug, Deserialize)]
struct Generation {
    text: String,
}

#[derive(Debug, Deserialize)]
struct CohereError {
    message: String,
}

/// The Cohere generate-API client used by all routes.
/// Built once at startup from explicit configuration, never a global.
#[derive(Clone)]
pub struct CohereClient {
    client: Client,
    api_key: String,
}

impl CohereClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl TextGenerator for CohereClient {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerateError> {
        let request_body = CohereRequest {
            model: MODEL,
            prompt,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            k: 0,
            stop_sequences: params.stop_sequences,
            return_likelihoods: "NONE",
        };

        let response = self
            .client
            .post(COHERE_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the service's error message
            let message = serde_json::from_str::<CohereError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(GenerateError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let cohere_response: CohereResponse = response.json().await?;

        let text = cohere_response
            .generations
            .into_iter()
            .next()
            .map(|g| g.text)
            .ok_or(GenerateError::EmptyContent)?;

        debug!("Generation call succeeded: {} chars returned", text.len());

        Ok(text)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// A `TextGenerator` that always returns the same canned text.
    pub struct CannedGenerator {
        pub reply: String,
    }

    impl CannedGenerator {
        pub fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(
            &self,
            _prompt: &str,
            _params: &GenerationParams,
        ) -> Result<String, GenerateError> {
            Ok(self.reply.clone())
        }
    }

    /// A `TextGenerator` that always fails, simulating an upstream outage.
    pub struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(
            &self,
            _prompt: &str,
            _params: &GenerationParams,
        ) -> Result<String, GenerateError> {
            Err(GenerateError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            })
        }
    }
}
