// src/evaluator/prompt.rs — Judge prompt for a single idea submission

use crate::core::types::IdeaSubmission;

/// Literal substituted for blank submission fields.
pub const NOT_PROVIDED: &str = "Not provided";

/// Build the prompt sent to the text-generation endpoint.
///
/// Sections (in order):
///   1. Persona — strict pre-screening judge
///   2. Context — how real judging panels work
///   3. Inputs — the three submission fields, verbatim
///   4. Task
///   5. Output rules + the exact JSON skeleton expected back
pub fn build_prompt(submission: &IdeaSubmission) -> String {
    let mut prompt = String::with_capacity(2048);

    append_persona_section(&mut prompt);
    append_context_section(&mut prompt);
    append_inputs_section(&mut prompt, submission);

    prompt.push_str("TASK:\nEvaluate quickly like a real judge.\n\n");

    append_output_contract(&mut prompt);
    prompt
}

fn append_persona_section(prompt: &mut String) {
    prompt.push_str(
        "You are an experienced hackathon judge who has evaluated more than 1,000 \
         startup and hackathon submissions.\n\n",
    );
    prompt.push_str("You act as a STRICT PRE-SCREENING FILTER.\n\n");
}

fn append_context_section(prompt: &mut String) {
    prompt.push_str("CONTEXT:\n");
    for line in [
        "Judges review 50–200 submissions",
        "2–4 minutes attention",
        "Clarity, impact, novelty, feasibility matter most",
        "Generic AI ideas are penalized",
    ] {
        prompt.push_str("- ");
        prompt.push_str(line);
        prompt.push('\n');
    }
    prompt.push('\n');
}

fn append_inputs_section(prompt: &mut String, submission: &IdeaSubmission) {
    prompt.push_str("INPUTS\n\n");
    for (label, value) in [
        ("IDEA TITLE", &submission.title),
        ("HACKATHON THEME", &submission.theme),
        ("IDEA DESCRIPTION", &submission.description),
    ] {
        prompt.push_str(label);
        prompt.push_str(":\n");
        prompt.push_str(or_placeholder(value));
        prompt.push_str("\n\n");
    }
}

fn append_output_contract(prompt: &mut String) {
    prompt.push_str(
        "OUTPUT RULES:\n\
         Return STRICT JSON ONLY.\n\
         No markdown.\n\
         No explanations.\n\
         Must start with { and end with }.\n\
         Score MUST always be formatted as \"number/100\".\n\n",
    );
    prompt.push_str("RETURN EXACTLY:\n\n");
    prompt.push_str(
        r#"{
  "score": "number/100",
  "impression": "short 2 sentence judge impression",
  "strengths": ["string", "string", "string"],
  "risks": ["string", "string", "string"],
  "weakness": "single biggest weakness",
  "improvement": "highest impact improvement action",
  "title_suggestions": {
    "high_score_variations": ["string", "string"],
    "theme_aligned_variations": ["string", "string", "string"]
  }
}
"#,
    );
}

/// Whitespace-only counts as blank.
fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_PROVIDED
    } else {
        value
    }
}
