//! Client for the Google Generative Language (Gemini) API.
//!
//! [`client::GeminiClient`] wraps the `generateContent` REST endpoint using
//! [`reqwest`]. Callers should depend on the [`ItineraryGenerator`] trait
//! rather than the concrete client so the generation step can be faked in
//! tests.

pub mod client;

pub use client::{GeminiClient, GeminiConfig, GeminiError};

use async_trait::async_trait;

/// Abstraction over the itinerary text generator.
///
/// The API layer's submission routine takes this as an injected dependency,
/// so it can be exercised without network access.
#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    /// Whether the generator has the credentials it needs.
    ///
    /// Checked before any generation attempt so a missing key surfaces as a
    /// configuration error rather than a failed call.
    fn is_configured(&self) -> bool;

    /// Generate itinerary text for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError>;
}
