//! Symptom analysis endpoints.
//!
//! Two endpoints:
//! - `POST /api/analysis` — run an analysis; results stay gated
//! - `POST /api/analysis/:id/acknowledge` — pass the disclaimer gate and
//!   consume the results

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::{AnalysisRequest, AnalysisResponse};
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::flow::AnalysisFlow;
use crate::models::ConfidenceBucket;
use crate::validation;

/// Shown with every successful analysis; must be acknowledged before
/// any condition is revealed.
pub const DISCLAIMER: &str = "This analysis is for informational purposes only and does \
not constitute medical advice. Always consult with a qualified healthcare professional \
for any health concerns.";

#[derive(Deserialize)]
pub struct SubmitBody {
    pub symptoms: String,
    #[serde(default)]
    pub medical_history: String,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub analysis_id: Uuid,
    pub status: &'static str,
    pub disclaimer: &'static str,
}

/// One result card.
#[derive(Serialize)]
pub struct ConditionCard {
    pub condition: String,
    pub confidence: f32,
    pub confidence_pct: u8,
    pub bucket: ConfidenceBucket,
}

/// One bar of the confidence chart.
#[derive(Serialize)]
pub struct ChartBar {
    pub name: String,
    pub confidence_pct: u8,
}

#[derive(Serialize)]
pub struct ResultsResponse {
    pub status: &'static str,
    pub conditions: Vec<ConditionCard>,
    pub chart: Vec<ChartBar>,
}

/// `POST /api/analysis` — validate the submission, run the analysis,
/// and gate the ranked response behind the disclaimer.
pub async fn submit(
    State(ctx): State<ApiContext>,
    Json(body): Json<SubmitBody>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let request = AnalysisRequest {
        symptoms: body.symptoms,
        medical_history: body.medical_history,
    };

    validation::validate_request(&request).map_err(ApiError::Validation)?;

    let mut flow = AnalysisFlow::new();
    flow.submit()?;

    match ctx.engine.analyze(&request).await {
        Ok(response) => {
            flow.succeed(response)?;
            let analysis_id = ctx
                .sessions
                .lock()
                .map_err(|_| ApiError::Internal("session lock poisoned".into()))?
                .insert(flow);

            Ok(Json(SubmitResponse {
                analysis_id,
                status: "disclaimer",
                disclaimer: DISCLAIMER,
            }))
        }
        Err(err) => {
            flow.fail()?;
            Err(ApiError::Analysis(err))
        }
    }
}

/// `POST /api/analysis/:id/acknowledge` — pass the disclaimer gate.
///
/// Consumes the session: the response is rendered exactly once, a second
/// acknowledgment finds nothing.
pub async fn acknowledge(
    State(ctx): State<ApiContext>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResultsResponse>, ApiError> {
    let session = ctx
        .sessions
        .lock()
        .map_err(|_| ApiError::Internal("session lock poisoned".into()))?
        .remove(&id)
        .ok_or_else(|| ApiError::NotFound("Analysis not found or already viewed".into()))?;

    let mut flow = session.flow;
    flow.acknowledge()?;
    let response = flow
        .results()
        .ok_or_else(|| ApiError::Internal("acknowledged flow holds no results".into()))?;

    Ok(Json(results_view(response)))
}

fn results_view(response: &AnalysisResponse) -> ResultsResponse {
    let conditions = response
        .conditions
        .iter()
        .map(|c| ConditionCard {
            condition: c.condition.clone(),
            confidence: c.confidence,
            confidence_pct: confidence_pct(c.confidence),
            bucket: ConfidenceBucket::from_confidence(c.confidence),
        })
        .collect();

    let chart = response
        .conditions
        .iter()
        .map(|c| ChartBar {
            name: c.condition.clone(),
            confidence_pct: confidence_pct(c.confidence),
        })
        .collect();

    ResultsResponse {
        status: "results",
        conditions,
        chart,
    }
}

fn confidence_pct(confidence: f32) -> u8 {
    // Confidence is clamped into [0,1] upstream, so this stays in 0..=100.
    (confidence * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConditionEstimate;

    #[test]
    fn results_view_buckets_and_rounds() {
        let response = AnalysisResponse {
            conditions: vec![
                ConditionEstimate::new("Influenza", 0.85),
                ConditionEstimate::new("COVID-19", 0.6),
                ConditionEstimate::new("Common Cold", 0.3),
            ],
        };
        let view = results_view(&response);

        assert_eq!(view.status, "results");
        assert_eq!(view.conditions.len(), 3);
        assert_eq!(view.chart.len(), 3);

        assert_eq!(view.conditions[0].confidence_pct, 85);
        assert_eq!(view.conditions[0].bucket, ConfidenceBucket::High);
        assert_eq!(view.conditions[1].bucket, ConfidenceBucket::Medium);
        assert_eq!(view.conditions[2].bucket, ConfidenceBucket::Low);

        assert_eq!(view.chart[0].name, "Influenza");
        assert_eq!(view.chart[2].confidence_pct, 30);
    }

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(confidence_pct(0.854), 85);
        assert_eq!(confidence_pct(0.855), 86);
        assert_eq!(confidence_pct(0.0), 0);
        assert_eq!(confidence_pct(1.0), 100);
    }

    #[test]
    fn disclaimer_names_the_gate_purpose() {
        assert!(DISCLAIMER.contains("does not constitute medical advice"));
    }
}
