// Post-parse validation for model-reported conditions.
// Applied between parse_analysis_response() and ranking.
// Flags/caps implausible entries that could be hallucinations or
// injection artifacts.

use crate::models::ConditionEstimate;

/// Maximum plausible candidate conditions from a single analysis.
const MAX_CONDITIONS: usize = 10;

/// Result of condition validation: conditions (possibly filtered/capped)
/// plus warnings.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub conditions: Vec<ConditionEstimate>,
    pub warnings: Vec<String>,
}

/// Validate model-reported conditions for plausibility.
///
/// Removes nameless entries and suspicious names, drops non-finite
/// confidences, clamps finite scores into [0,1], caps excessive counts.
pub fn validate_conditions(mut conditions: Vec<ConditionEstimate>) -> ValidationResult {
    let mut warnings = Vec::new();

    conditions.retain(|c| {
        if c.condition.trim().is_empty() {
            warnings.push("Condition with no name removed".to_string());
            return false;
        }
        if contains_injection_pattern(&c.condition) {
            warnings.push(format!(
                "Condition with suspicious name removed: '{}'",
                c.condition
            ));
            return false;
        }
        if !c.confidence.is_finite() {
            warnings.push(format!(
                "Condition '{}' with non-finite confidence removed",
                c.condition
            ));
            return false;
        }
        true
    });

    for c in &mut conditions {
        if c.confidence < 0.0 || c.confidence > 1.0 {
            warnings.push(format!(
                "Condition '{}': confidence {} clamped into [0,1]",
                c.condition, c.confidence
            ));
            c.confidence = c.confidence.clamp(0.0, 1.0);
        }
    }

    if conditions.len() > MAX_CONDITIONS {
        warnings.push(format!(
            "Excessive conditions ({}) capped to {MAX_CONDITIONS}",
            conditions.len()
        ));
        conditions.truncate(MAX_CONDITIONS);
    }

    if !warnings.is_empty() {
        tracing::warn!(
            warning_count = warnings.len(),
            "Condition validation warnings detected"
        );
    }

    ValidationResult {
        conditions,
        warnings,
    }
}

/// Check if text contains prompt injection patterns.
fn contains_injection_pattern(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("ignore previous")
        || lower.contains("ignore all")
        || lower.contains("disregard")
        || lower.contains("system:")
        || lower.contains("override")
        || lower.contains("[inst]")
        || lower.contains("<instruction")
}
