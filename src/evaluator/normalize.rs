// src/evaluator/normalize.rs — Parse extracted JSON into a complete Evaluation

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::types::{is_score_format, Evaluation, TitleSuggestions};
use crate::infra::errors::HackJudgeError;

/// How much of the record to check before accepting it.
///
/// | Field                          | Lenient                 | Strict                         |
/// |--------------------------------|-------------------------|--------------------------------|
/// | `score`                        | string, default `""`    | required, `<digits>/100`       |
/// | `impression`/`weakness`/`improvement` | string, default `""` | required string            |
/// | `strengths`/`risks`            | string array, default `[]` | required string array       |
/// | `title_suggestions`            | absent or non-object => empty lists (both modes)        |
/// | inner variation lists          | absent or non-array => `[]`, non-strings dropped        |
///
/// A field that is present with the wrong JSON type is rejected in both modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizeMode {
    #[default]
    Strict,
    Lenient,
}

/// Parse `slice` and repair it into an `Evaluation` according to `mode`.
pub fn normalize(slice: &str, mode: NormalizeMode) -> Result<Evaluation, HackJudgeError> {
    let value: Value = serde_json::from_str(slice)?;
    let obj = value
        .as_object()
        .ok_or_else(|| HackJudgeError::Validation("expected a JSON object".into()))?;

    let required = mode == NormalizeMode::Strict;

    let score = string_field(obj, "score", required)?;
    if required && !is_score_format(&score) {
        return Err(HackJudgeError::Validation(format!(
            "score '{}' is not formatted as <integer>/100",
            score
        )));
    }

    Ok(Evaluation {
        score,
        impression: string_field(obj, "impression", required)?,
        strengths: string_list_field(obj, "strengths", required)?,
        risks: string_list_field(obj, "risks", required)?,
        weakness: string_field(obj, "weakness", required)?,
        improvement: string_field(obj, "improvement", required)?,
        title_suggestions: title_suggestions(obj),
    })
}

/// Absent and `null` are treated alike.
fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

fn string_field(
    obj: &Map<String, Value>,
    key: &str,
    required: bool,
) -> Result<String, HackJudgeError> {
    match present(obj, key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(HackJudgeError::Validation(format!(
            "'{}' must be a string, got {}",
            key,
            type_name(other)
        ))),
        None if required => Err(missing(key)),
        None => Ok(String::new()),
    }
}

fn string_list_field(
    obj: &Map<String, Value>,
    key: &str,
    required: bool,
) -> Result<Vec<String>, HackJudgeError> {
    match present(obj, key) {
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(HackJudgeError::Validation(format!(
                    "'{}[{}]' must be a string, got {}",
                    key,
                    i,
                    type_name(other)
                ))),
            })
            .collect(),
        Some(other) => Err(HackJudgeError::Validation(format!(
            "'{}' must be an array, got {}",
            key,
            type_name(other)
        ))),
        None if required => Err(missing(key)),
        None => Ok(Vec::new()),
    }
}

/// Never fails: whatever the model sent, the result is structurally complete.
fn title_suggestions(obj: &Map<String, Value>) -> TitleSuggestions {
    let Some(Value::Object(inner)) =
        present(obj, "title_suggestions").or_else(|| present(obj, "titleSuggestions"))
    else {
        return TitleSuggestions::default();
    };

    TitleSuggestions {
        high_score_variations: loose_strings(inner, "high_score_variations", "highScoreVariations"),
        theme_aligned_variations: loose_strings(
            inner,
            "theme_aligned_variations",
            "themeAlignedVariations",
        ),
    }
}

fn loose_strings(obj: &Map<String, Value>, key: &str, alias: &str) -> Vec<String> {
    present(obj, key)
        .or_else(|| present(obj, alias))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

fn missing(key: &str) -> HackJudgeError {
    HackJudgeError::Validation(format!("missing required field '{}'", key))
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
