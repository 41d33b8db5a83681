// src/cli/input.rs — Collect an IdeaSubmission from flags, files, stdin or prompts

use anyhow::anyhow;
use inquire::{Select, Text};
use std::io::Read;

use super::EvaluateArgs;
use crate::core::types::{IdeaSubmission, DEFAULT_THEME, KNOWN_THEMES};

const OTHER_THEME: &str = "Other...";

/// Build the submission snapshot for one evaluation.
pub fn read_submission(args: &EvaluateArgs) -> anyhow::Result<IdeaSubmission> {
    let description = resolve_description(args, std::io::stdin())?;

    let mut submission = IdeaSubmission::new(
        args.title.clone().unwrap_or_default(),
        args.theme.clone().unwrap_or_else(|| DEFAULT_THEME.into()),
        description.clone().unwrap_or_default(),
    );

    if args.interactive {
        if args.title.is_none() {
            submission.title = Text::new("Idea title:")
                .prompt()
                .map_err(|e| anyhow!("Input cancelled: {e}"))?;
        }
        if args.theme.is_none() {
            submission.theme = pick_theme()?;
        }
        if description.is_none() {
            submission.description = Text::new("Describe your hackathon idea:")
                .prompt()
                .map_err(|e| anyhow!("Input cancelled: {e}"))?;
        }
    }

    if !submission.has_known_theme() {
        tracing::debug!(theme = %submission.theme, "Using a custom hackathon theme");
    }
    Ok(submission)
}

/// `--description` wins, then `--description-file`, then `--stdin`.
fn resolve_description(
    args: &EvaluateArgs,
    mut stdin: impl Read,
) -> anyhow::Result<Option<String>> {
    if let Some(ref d) = args.description {
        return Ok(Some(d.clone()));
    }
    if let Some(ref path) = args.description_file {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Cannot read description file '{}': {}", path, e))?;
        return Ok(Some(content.trim_end().to_string()));
    }
    if args.stdin {
        let mut buf = String::new();
        stdin.read_to_string(&mut buf)?;
        return Ok(Some(buf.trim_end().to_string()));
    }
    Ok(None)
}

fn pick_theme() -> anyhow::Result<String> {
    let mut options: Vec<&str> = KNOWN_THEMES.to_vec();
    options.push(OTHER_THEME);

    let choice = Select::new("Hackathon theme:", options)
        .prompt()
        .map_err(|e| anyhow!("Input cancelled: {e}"))?;

    if choice == OTHER_THEME {
        Text::new("Theme:")
            .prompt()
            .map_err(|e| anyhow!("Input cancelled: {e}"))
    } else {
        Ok(choice.to_string())
    }
}
