use serde::{Deserialize, Serialize};

/// One candidate condition returned by the model.
///
/// `confidence` is the model-reported likelihood in [0,1]. The raw list
/// arrives unordered — ordering is applied by the consumer, not stored
/// as part of the entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionEstimate {
    pub condition: String,
    pub confidence: f32,
}

impl ConditionEstimate {
    pub fn new(condition: impl Into<String>, confidence: f32) -> Self {
        Self {
            condition: condition.into(),
            confidence,
        }
    }
}
