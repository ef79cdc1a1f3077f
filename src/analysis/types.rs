use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::AnalysisError;
use crate::models::ConditionEstimate;

/// Input contract of the symptom-analysis capability.
///
/// Carries the raw form strings — no trimming, comma-splitting, or other
/// normalization happens before submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub symptoms: String,
    /// Optional; an absent field arrives as the empty string.
    #[serde(default)]
    pub medical_history: String,
}

/// Output contract of the symptom-analysis capability.
///
/// The model returns the list unordered; the engine ranks it by
/// descending confidence before handing it to anyone else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub conditions: Vec<ConditionEstimate>,
}

/// LLM capability abstraction (allows mocking, keeps the underlying
/// model service swappable without touching the flow).
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        system: &str,
    ) -> Result<String, AnalysisError>;

    async fn is_model_available(&self, model: &str) -> Result<bool, AnalysisError>;

    async fn list_models(&self) -> Result<Vec<String>, AnalysisError>;
}
