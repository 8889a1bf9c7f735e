//! AI-drafted manifesto built from approved text posts.

mod gemini;
mod generator;
mod prompt;
mod summarizer;

pub use gemini::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use generator::{GeneratorError, ManifestoGenerator, UnconfiguredGenerator};
pub use prompt::{
    approved_text_lines, build_request, GenerationRequest, FAILURE_MESSAGE,
    INSUFFICIENT_DATA_MESSAGE, SYSTEM_INSTRUCTION, UNAVAILABLE_MESSAGE,
};
pub use summarizer::{ManifestoSummarizer, SummaryRefusal};
