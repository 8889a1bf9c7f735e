use async_trait::async_trait;

use super::prompt::GenerationRequest;

/// Boundary to the external text-generation service.
#[async_trait]
pub trait ManifestoGenerator: Send + Sync {
    /// Returns the generated text, possibly empty when the service produced
    /// no candidate.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GeneratorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("generator is not configured: {0}")]
    NotConfigured(String),
    #[error("generator request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generator returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("generator timed out after {0:?}")]
    Timeout(std::time::Duration),
}

/// Stand-in used when no API key is available; every call fails.
#[derive(Debug, Clone, Default)]
pub struct UnconfiguredGenerator;

#[async_trait]
impl ManifestoGenerator for UnconfiguredGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String, GeneratorError> {
        Err(GeneratorError::NotConfigured(
            "GEMINI_API_KEY is not set".to_string(),
        ))
    }
}
