//! The analysis flow as an explicit state machine.
//!
//! `idle → loading → (error → idle) | (disclaimer → results)`
//!
//! Each transition is a guarded method; anything else is an
//! `IllegalTransition`. `Results` can only be constructed through
//! `acknowledge`, so showing results without the disclaimer gate is
//! unreachable. There is no `loading → results` edge.

use thiserror::Error;

use crate::analysis::AnalysisResponse;

#[derive(Debug, Clone)]
pub enum AnalysisFlow {
    /// Form enabled, nothing in flight.
    Idle,
    /// Request in flight; the form is disabled, so at most one analysis
    /// runs at a time.
    Loading,
    /// Analysis succeeded; results are held behind the disclaimer gate.
    Disclaimer { response: AnalysisResponse },
    /// Disclaimer acknowledged; results may be rendered.
    Results { response: AnalysisResponse },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("illegal transition: {event} while {state}")]
    IllegalTransition {
        state: &'static str,
        event: &'static str,
    },
}

impl AnalysisFlow {
    pub fn new() -> Self {
        Self::Idle
    }

    pub fn state_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Disclaimer { .. } => "disclaimer",
            Self::Results { .. } => "results",
        }
    }

    /// `idle → loading` on form submit.
    pub fn submit(&mut self) -> Result<(), FlowError> {
        match self {
            Self::Idle => {
                *self = Self::Loading;
                Ok(())
            }
            _ => Err(self.illegal("submit")),
        }
    }

    /// `loading → idle` on failure. The error itself is a transient
    /// notification; the flow lands back on an editable form.
    pub fn fail(&mut self) -> Result<(), FlowError> {
        match self {
            Self::Loading => {
                *self = Self::Idle;
                Ok(())
            }
            _ => Err(self.illegal("fail")),
        }
    }

    /// `loading → disclaimer` on success. Results stay gated.
    pub fn succeed(&mut self, response: AnalysisResponse) -> Result<(), FlowError> {
        match self {
            Self::Loading => {
                *self = Self::Disclaimer { response };
                Ok(())
            }
            _ => Err(self.illegal("succeed")),
        }
    }

    /// `disclaimer → results` on explicit acknowledgment — the only way
    /// into `Results`.
    pub fn acknowledge(&mut self) -> Result<(), FlowError> {
        match std::mem::replace(self, Self::Idle) {
            Self::Disclaimer { response } => {
                *self = Self::Results { response };
                Ok(())
            }
            other => {
                *self = other;
                Err(self.illegal("acknowledge"))
            }
        }
    }

    /// The ranked response, available only in `Results`.
    pub fn results(&self) -> Option<&AnalysisResponse> {
        match self {
            Self::Results { response } => Some(response),
            _ => None,
        }
    }

    fn illegal(&self, event: &'static str) -> FlowError {
        FlowError::IllegalTransition {
            state: self.state_name(),
            event,
        }
    }
}

impl Default for AnalysisFlow {
    fn default() -> Self {
        Self::new()
    }
}
