// src/core/controller.rs — Runs one submission through the evaluation pipeline

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::state::{Pipeline, PipelineEvent, PipelineState};
use super::types::{Evaluation, IdeaSubmission};
use crate::evaluator::extract::extract_json_object;
use crate::evaluator::normalize::{normalize, NormalizeMode};
use crate::evaluator::prompt::build_prompt;
use crate::infra::errors::{ErrorKind, HackJudgeError};
use crate::provider::TextGenerator;

type ProgressCallback = Box<dyn Fn(&PipelineEvent) + Send + Sync>;

/// What a single `submit` call ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded(Evaluation),
    Failed(ErrorKind),
    /// A newer submission started before this one finished; its result was dropped.
    Superseded,
}

/// Owns the pipeline state and is the only thing that mutates it.
pub struct EvaluationController {
    generator: Arc<dyn TextGenerator>,
    mode: NormalizeMode,
    pipeline: Mutex<Pipeline>,
    next_seq: AtomicU64,
    progress: Option<ProgressCallback>,
}

impl EvaluationController {
    pub fn new(generator: Arc<dyn TextGenerator>, mode: NormalizeMode) -> Self {
        Self {
            generator,
            mode,
            pipeline: Mutex::new(Pipeline::default()),
            next_seq: AtomicU64::new(0),
            progress: None,
        }
    }

    /// Observe every applied transition. Stale events are not reported.
    pub fn with_progress(
        mut self,
        callback: impl Fn(&PipelineEvent) + Send + Sync + 'static,
    ) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> PipelineState {
        self.lock().state.clone()
    }

    pub fn last_evaluation(&self) -> Option<Evaluation> {
        self.lock().last_evaluation.clone()
    }

    pub fn snapshot(&self) -> Pipeline {
        self.lock().clone()
    }

    /// Evaluate `submission`. Always lands in a non-pending state unless a newer
    /// submission has taken over, in which case that one owns the state.
    /// Dropping the future early completes it as `Failed(Internal)`.
    pub async fn submit(&self, submission: IdeaSubmission) -> SubmitOutcome {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.apply(PipelineEvent::Submitted { seq });
        tracing::info!(seq, title = %submission.title, "Evaluation submitted");

        let guard = CancelGuard { controller: self, seq };
        let outcome = self.evaluate(&submission).await.map_err(|e| {
            tracing::warn!(
                seq,
                kind = %e.kind(),
                retriable = e.is_retriable(),
                "Evaluation failed: {}",
                e
            );
            e.kind()
        });
        std::mem::forget(guard);

        let applied = self.apply(PipelineEvent::Completed {
            seq,
            outcome: outcome.clone(),
        });
        if !applied {
            tracing::debug!(seq, "Discarding result of superseded submission");
            return SubmitOutcome::Superseded;
        }

        match outcome {
            Ok(eval) => {
                tracing::info!(seq, score = %eval.score, "Evaluation succeeded");
                SubmitOutcome::Succeeded(eval)
            }
            Err(kind) => SubmitOutcome::Failed(kind),
        }
    }

    /// The stateless pipeline: prompt, generate, extract, normalize.
    pub async fn evaluate(
        &self,
        submission: &IdeaSubmission,
    ) -> Result<Evaluation, HackJudgeError> {
        let prompt = build_prompt(submission);
        let raw = self.generator.generate(&prompt).await?;
        tracing::debug!("Raw model output: {}", raw);

        let slice = extract_json_object(&raw)?;
        normalize(slice, self.mode)
    }

    fn apply(&self, event: PipelineEvent) -> bool {
        {
            let mut pipeline = self.lock();
            match pipeline.transition(&event) {
                Some(next) => *pipeline = next,
                None => return false,
            }
        }
        if let Some(ref cb) = self.progress {
            cb(&event);
        }
        true
    }

    fn lock(&self) -> MutexGuard<'_, Pipeline> {
        self.pipeline.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Completes `seq` as failed if the `submit` future is dropped mid-flight,
/// so the pipeline never stays `Pending` for a caller that went away.
/// A no-op when a newer submission already took over.
struct CancelGuard<'a> {
    controller: &'a EvaluationController,
    seq: u64,
}

impl Drop for CancelGuard<'_> {
    fn drop(&mut self) {
        let applied = self.controller.apply(PipelineEvent::Completed {
            seq: self.seq,
            outcome: Err(ErrorKind::Internal),
        });
        if applied {
            tracing::debug!(seq = self.seq, "Submission dropped before completing");
        }
    }
}
