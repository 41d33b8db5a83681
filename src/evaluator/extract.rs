// src/evaluator/extract.rs — Locate the JSON object inside raw model output

use crate::infra::errors::HackJudgeError;

/// Return the slice from the first `{` to the last `}` inclusive.
///
/// No balancing is attempted: prose, markdown fences, or stray text outside
/// the outermost braces is dropped, and everything between them is kept as-is.
pub fn extract_json_object(raw: &str) -> Result<&str, HackJudgeError> {
    let start = raw
        .find('{')
        .ok_or_else(|| HackJudgeError::Extraction("no '{' in model output".into()))?;
    let end = raw
        .rfind('}')
        .ok_or_else(|| HackJudgeError::Extraction("no '}' in model output".into()))?;

    if start >= end {
        return Err(HackJudgeError::Extraction(format!(
            "braces out of order (first '{{' at {}, last '}}' at {})",
            start, end
        )));
    }

    // Both indices sit on single-byte ASCII chars, so the slice is on char boundaries.
    Ok(&raw[start..=end])
}
