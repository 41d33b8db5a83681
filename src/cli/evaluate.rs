// src/cli/evaluate.rs — `hackjudge evaluate`: one submission, JSON on stdout

use std::sync::Arc;

use super::input::read_submission;
use super::progress::terminal_progress;
use super::EvaluateArgs;
use crate::core::controller::{EvaluationController, SubmitOutcome};
use crate::core::types::Evaluation;
use crate::evaluator::normalize::NormalizeMode;
use crate::infra::config::Config;
use crate::provider::ollama::OllamaGenerator;
use crate::provider::TextGenerator;

/// Run a single evaluation against the configured endpoint.
pub async fn run_evaluate(args: &EvaluateArgs, config: &Config) -> anyhow::Result<()> {
    let submission = read_submission(args)?;

    let mode = if args.lenient {
        NormalizeMode::Lenient
    } else {
        config.evaluation.mode
    };

    let generator: Arc<dyn TextGenerator> =
        Arc::new(OllamaGenerator::from_config(&config.inference));
    tracing::debug!(
        endpoint = %config.inference.endpoint,
        model = generator.model(),
        ?mode,
        "Starting evaluation"
    );

    let controller =
        EvaluationController::new(generator, mode).with_progress(terminal_progress());

    match controller.submit(submission).await {
        SubmitOutcome::Succeeded(eval) => {
            println!("{}", render_json(&eval, args.compact)?);
            Ok(())
        }
        SubmitOutcome::Failed(kind) => anyhow::bail!(
            "Failed to evaluate idea ({} error). Re-run with -vv for details.",
            kind
        ),
        SubmitOutcome::Superseded => anyhow::bail!("Evaluation was superseded"),
    }
}

fn render_json(eval: &Evaluation, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(eval)
    } else {
        serde_json::to_string_pretty(eval)
    }
}
