//! Field-level validation of a symptom submission.
//!
//! Runs before any model work. Checks length constraints only — the raw
//! strings pass through untouched (no trimming, no comma-splitting).

use serde::Serialize;

use crate::analysis::AnalysisRequest;

pub const MIN_SYMPTOMS_CHARS: usize = 10;
pub const MAX_SYMPTOMS_CHARS: usize = 1000;
pub const MAX_HISTORY_CHARS: usize = 1000;

/// One field constraint violation, addressed to the form field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a submission against the form's length constraints.
///
/// Symptoms must be 10–1000 characters; medical history is optional but
/// capped at 1000 characters. Lengths are counted in characters.
pub fn validate_request(request: &AnalysisRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    let symptoms_len = request.symptoms.chars().count();
    if symptoms_len < MIN_SYMPTOMS_CHARS {
        errors.push(FieldError::new(
            "symptoms",
            "Please describe your symptoms in at least 10 characters.",
        ));
    } else if symptoms_len > MAX_SYMPTOMS_CHARS {
        errors.push(FieldError::new(
            "symptoms",
            "Symptoms cannot exceed 1000 characters.",
        ));
    }

    if request.medical_history.chars().count() > MAX_HISTORY_CHARS {
        errors.push(FieldError::new(
            "medical_history",
            "Medical history cannot exceed 1000 characters.",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
