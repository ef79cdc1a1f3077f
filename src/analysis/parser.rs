use serde::Deserialize;

use super::types::AnalysisResponse;
use super::AnalysisError;
use crate::models::ConditionEstimate;

/// Parse the model's reply into an unranked AnalysisResponse.
///
/// A reply without a parseable JSON object is malformed; a JSON object
/// without a `conditions` field is an invalid response. Individual
/// condition entries parse leniently — entries that fail to deserialize
/// are skipped rather than failing the whole reply.
pub fn parse_analysis_response(response: &str) -> Result<AnalysisResponse, AnalysisError> {
    let json_str = extract_json_block(response)?;
    parse_conditions_json(&json_str)
}

/// Extract the JSON payload from the reply.
///
/// Fenced ```json blocks take precedence; a bare object (first `{` to
/// last `}`) is accepted as a fallback since some models skip the fences.
fn extract_json_block(response: &str) -> Result<String, AnalysisError> {
    if let Some(fence_start) = response.find("```json") {
        let content_start = fence_start + 7;
        let fence_end = response[content_start..]
            .find("```")
            .ok_or_else(|| AnalysisError::MalformedResponse("Unclosed JSON block".into()))?;
        return Ok(response[content_start..content_start + fence_end]
            .trim()
            .to_string());
    }

    let start = response
        .find('{')
        .ok_or_else(|| AnalysisError::MalformedResponse("No JSON object found".into()))?;
    let end = response
        .rfind('}')
        .filter(|end| *end > start)
        .ok_or_else(|| AnalysisError::MalformedResponse("Unterminated JSON object".into()))?;

    Ok(response[start..=end].trim().to_string())
}

fn parse_conditions_json(json_str: &str) -> Result<AnalysisResponse, AnalysisError> {
    #[derive(Deserialize)]
    struct RawResponse {
        conditions: Option<Vec<serde_json::Value>>,
    }

    let raw: RawResponse = serde_json::from_str(json_str)
        .map_err(|e| AnalysisError::JsonParsing(e.to_string()))?;

    let items = raw.conditions.ok_or(AnalysisError::InvalidResponse)?;

    Ok(AnalysisResponse {
        conditions: parse_array_lenient(&items),
    })
}

/// Parse an array leniently — skip items that fail to deserialize.
fn parse_array_lenient(items: &[serde_json::Value]) -> Vec<ConditionEstimate> {
    items
        .iter()
        .filter_map(|v| serde_json::from_value(v.clone()).ok())
        .collect()
}
