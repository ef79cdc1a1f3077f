use std::sync::Arc;

use super::parser::parse_analysis_response;
use super::prompt::{build_analysis_prompt, ANALYSIS_SYSTEM_PROMPT};
use super::ranking::rank_conditions;
use super::types::{AnalysisRequest, AnalysisResponse, LlmClient};
use super::validation::validate_conditions;
use super::AnalysisError;

/// Orchestrates one symptom analysis: guard → prompt → model call →
/// parse → validate → rank.
///
/// A single asynchronous call per request — no retry, no cancellation.
/// A failed call is reported immediately to the caller.
pub struct AnalysisEngine {
    client: Arc<dyn LlmClient>,
    model: String,
}

impl AnalysisEngine {
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one analysis and return the ranked response.
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResponse, AnalysisError> {
        if request.symptoms.is_empty() {
            return Err(AnalysisError::MissingInput);
        }

        let prompt = build_analysis_prompt(&request.symptoms, &request.medical_history);

        tracing::debug!(model = %self.model, "Requesting symptom analysis");
        let reply = self
            .client
            .generate(&self.model, &prompt, ANALYSIS_SYSTEM_PROMPT)
            .await?;

        let parsed = parse_analysis_response(&reply)?;
        let validated = validate_conditions(parsed.conditions);
        let conditions = rank_conditions(validated.conditions);

        tracing::info!(
            condition_count = conditions.len(),
            warning_count = validated.warnings.len(),
            "Symptom analysis complete"
        );

        Ok(AnalysisResponse { conditions })
    }

    /// Whether the configured model is present on the backing service.
    pub async fn model_ready(&self) -> bool {
        self.client
            .is_model_available(&self.model)
            .await
            .unwrap_or(false)
    }
}
