pub const ANALYSIS_SYSTEM_PROMPT: &str = r#"
You are an AI-powered medical assistant that analyzes symptoms and provides
a ranked list of potential health conditions.

RULES — ABSOLUTE, NO EXCEPTIONS:
1. Base the analysis ONLY on the symptoms and medical history provided.
2. NEVER output treatment advice, dosing, or clinical instructions.
3. Every confidence score is a number between 0 and 1.
4. Output MUST be a single JSON object wrapped in ```json``` fences,
   containing a "conditions" array.
5. If the input does not describe symptoms, return an empty conditions array.
"#;

/// Build the analysis prompt for one submission.
///
/// The two fields are interpolated verbatim — the template is part of the
/// external-service contract, not a place for input rewriting.
pub fn build_analysis_prompt(symptoms: &str, medical_history: &str) -> String {
    format!(
        r#"Analyze the following symptoms and medical history to generate a ranked
list of potential health conditions with confidence scores.

Symptoms: {symptoms}
Medical History: {medical_history}

Respond with exactly this JSON shape:

```json
{{
  "conditions": [
    {{"condition": "Name of the potential health condition", "confidence": 0.0}}
  ]
}}
```

Conditions:"#
    )
}
