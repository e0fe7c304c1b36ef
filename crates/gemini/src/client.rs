//! REST client for the Gemini `generateContent` endpoint.
//!
//! One request, one response: the prompt goes out as a single user turn and
//! the first candidate's text comes back. No retries and no client-side
//! timeout; a failure is surfaced to the caller as-is.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ItineraryGenerator;

/// Default model when `GEMINI_MODEL` is not set.
const DEFAULT_MODEL: &str = "gemini-1.5-pro";

/// Default API base URL when `GEMINI_BASE_URL` is not set.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the Gemini client.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key. `None` when unset; generation then fails with
    /// [`GeminiError::MissingApiKey`] before any request is attempted.
    pub api_key: Option<String>,
    /// Model name, e.g. `gemini-1.5-pro`.
    pub model: String,
    /// API base URL. Overridable so tests can point at a local stub.
    pub base_url: String,
}

impl GeminiConfig {
    /// Load Gemini configuration from environment variables.
    ///
    /// | Env Var           | Required | Default                                     |
    /// |-------------------|----------|---------------------------------------------|
    /// | `GEMINI_API_KEY`  | no       | -- (generation disabled until set)          |
    /// | `GEMINI_MODEL`    | no       | `gemini-1.5-pro`                            |
    /// | `GEMINI_BASE_URL` | no       | `https://generativelanguage.googleapis.com` |
    ///
    /// A missing key is deliberately not a startup failure: the rest of the
    /// service (auth, saved trips) stays usable without it.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        Self {
            api_key,
            model,
            base_url,
        }
    }
}

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the Gemini REST layer.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// No API key is configured; the request was never attempted.
    #[error("GEMINI_API_KEY is not configured")]
    MissingApiKey,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response contained no candidate with usable text.
    #[error("Gemini returned no usable candidates")]
    EmptyResponse,
}

impl GeminiError {
    /// Whether this failure is a quota / rate-limit rejection.
    ///
    /// Detected by HTTP 429 or by the error text mentioning `429` or `quota`,
    /// matching how the upstream service words its RESOURCE_EXHAUSTED errors.
    /// Quota errors get a distinct user-facing message upstream.
    pub fn is_quota_exceeded(&self) -> bool {
        if let GeminiError::Api { status: 429, .. } = self {
            return true;
        }
        let message = self.to_string();
        message.contains("429") || message.to_lowercase().contains("quota")
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Request body for `generateContent`.
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

/// One conversation turn. Requests carry a single user turn.
#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

/// A text fragment within a turn.
#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

/// Response body for `generateContent`. Fields we do not read are ignored.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Flatten the first candidate's parts into one string.
///
/// An empty candidate list, a candidate without content, or all-empty parts
/// count as [`GeminiError::EmptyResponse`].
fn extract_text(response: GenerateContentResponse) -> Result<String, GeminiError> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(GeminiError::EmptyResponse);
    }
    Ok(text)
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client for one Gemini model endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new client from configuration.
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across services).
    pub fn with_client(client: reqwest::Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    /// Send a `generateContent` request and return the generated text.
    async fn generate_content(&self, prompt: &str) -> Result<String, GeminiError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(GeminiError::MissingApiKey);
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, api_key
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = extract_text(parsed)?;

        tracing::debug!(
            model = %self.config.model,
            chars = text.len(),
            "Gemini generation completed"
        );

        Ok(text)
    }
}

#[async_trait]
impl ItineraryGenerator for GeminiClient {
    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        self.generate_content(prompt).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
