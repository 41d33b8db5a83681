// src/core/state.rs — Request lifecycle state machine
//
// Idle -> Pending -> {Succeeded, Failed}; a new submission re-enters Pending
// from any state. Every submission carries a monotonic sequence number and
// only the completion matching the latest one is applied (latest wins).

use serde::Serialize;

use super::types::Evaluation;
use crate::infra::errors::ErrorKind;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum PipelineState {
    #[default]
    Idle,
    Pending,
    Succeeded(Evaluation),
    Failed(ErrorKind),
}

impl PipelineState {
    pub fn is_pending(&self) -> bool {
        matches!(self, PipelineState::Pending)
    }

    /// The evaluation this state reports as current. Failed states report none.
    pub fn current_evaluation(&self) -> Option<&Evaluation> {
        match self {
            PipelineState::Succeeded(eval) => Some(eval),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PipelineState::Idle => "idle",
            PipelineState::Pending => "pending",
            PipelineState::Succeeded(_) => "succeeded",
            PipelineState::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    Submitted {
        seq: u64,
    },
    Completed {
        seq: u64,
        outcome: Result<Evaluation, ErrorKind>,
    },
}

impl PipelineEvent {
    pub fn seq(&self) -> u64 {
        match self {
            PipelineEvent::Submitted { seq } | PipelineEvent::Completed { seq, .. } => *seq,
        }
    }
}

/// Everything the controller owns about the lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    pub state: PipelineState,
    /// Sequence number of the most recent submission, 0 before the first.
    pub latest_seq: u64,
    /// Last successful evaluation. Survives later failures.
    pub last_evaluation: Option<Evaluation>,
}

impl Pipeline {
    /// Whether `event` would change anything.
    pub fn accepts(&self, event: &PipelineEvent) -> bool {
        match event {
            PipelineEvent::Submitted { seq } => *seq > self.latest_seq,
            PipelineEvent::Completed { seq, .. } => {
                self.state.is_pending() && *seq == self.latest_seq
            }
        }
    }

    /// Next pipeline for `event`, or `None` when the event is stale or out of order.
    pub fn transition(&self, event: &PipelineEvent) -> Option<Pipeline> {
        if !self.accepts(event) {
            return None;
        }

        let next = match event {
            PipelineEvent::Submitted { seq } => Pipeline {
                state: PipelineState::Pending,
                latest_seq: *seq,
                last_evaluation: self.last_evaluation.clone(),
            },
            PipelineEvent::Completed {
                outcome: Ok(eval), ..
            } => Pipeline {
                state: PipelineState::Succeeded(eval.clone()),
                latest_seq: self.latest_seq,
                last_evaluation: Some(eval.clone()),
            },
            PipelineEvent::Completed {
                outcome: Err(kind), ..
            } => Pipeline {
                state: PipelineState::Failed(*kind),
                latest_seq: self.latest_seq,
                last_evaluation: self.last_evaluation.clone(),
            },
        };
        Some(next)
    }
}
