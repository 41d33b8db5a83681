// src/cli/progress.rs — Terminal progress renderer for pipeline transitions

use crate::core::state::PipelineEvent;

/// Build a progress callback that writes one line per transition to stderr.
///
/// stdout stays clean for the evaluation JSON.
pub fn terminal_progress() -> impl Fn(&PipelineEvent) + Send + Sync + 'static {
    |event: &PipelineEvent| eprintln!("{}", render(event))
}

fn render(event: &PipelineEvent) -> String {
    match event {
        PipelineEvent::Submitted { seq } => format!("[evaluate #{}] judging...", seq),
        PipelineEvent::Completed {
            seq,
            outcome: Ok(eval),
        } => format!("[evaluate #{}] done: score {}", seq, display_score(&eval.score)),
        PipelineEvent::Completed {
            seq,
            outcome: Err(kind),
        } => format!("[evaluate #{}] failed ({})", seq, kind),
    }
}

fn display_score(score: &str) -> &str {
    if score.is_empty() {
        "--"
    } else {
        score
    }
}
