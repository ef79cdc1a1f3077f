pub mod types;
pub mod prompt;
pub mod parser;
pub mod validation;
pub mod ranking;
pub mod ollama;
pub mod engine;

pub use types::*;
pub use prompt::*;
pub use parser::*;
pub use validation::*;
pub use ranking::*;
pub use ollama::*;
pub use engine::*;

use thiserror::Error;

/// Fallback user-facing text for failures that carry no message of their own.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred during analysis.";

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Symptoms are required.")]
    MissingInput,

    #[error("AI model did not return a valid response.")]
    InvalidResponse,

    #[error("Ollama is not running at {0}")]
    Connection(String),

    #[error("Model endpoint returned error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("JSON parsing error: {0}")]
    JsonParsing(String),

    #[error("{0}")]
    Capability(String),
}

impl AnalysisError {
    /// Text shown to the user. Failures surface their own message; a
    /// failure with a blank message falls back to the fixed text.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}
