use crate::error::{Result, ScreenError};
use crate::types::answers::AnswerCollection;
use serde_json::{Number, Value};
use std::path::Path;

/// Read a JSON object of question id to answer.
///
/// String values are kept verbatim. Numbers and booleans are stored as their
/// JSON text so that ratings like `3` work without quoting; whole-valued
/// floats such as `3.0` are written as integers.
pub fn load_answers(path: &Path) -> Result<AnswerCollection> {
    if !path.exists() {
        return Err(ScreenError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_answers(&content)
        .map_err(|e| ScreenError::InvalidAnswers(format!("{}: {}", path.display(), e)))
}

pub fn parse_answers(content: &str) -> std::result::Result<AnswerCollection, String> {
    let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let Value::Object(map) = value else {
        return Err("expected a JSON object of question id to answer".to_string());
    };

    let mut answers = AnswerCollection::new();
    for (key, value) in map {
        let id = key
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("question id '{key}' is not a non-negative integer"))?;
        let text = match value {
            Value::String(text) => text,
            Value::Number(number) => number_text(&number),
            Value::Bool(flag) => flag.to_string(),
            Value::Null => continue,
            Value::Array(_) | Value::Object(_) => {
                return Err(format!("answer for question {id} must be a scalar"));
            }
        };
        answers.record(id, text);
    }
    Ok(answers)
}

fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 => format!("{value:.0}"),
        _ => number.to_string(),
    }
}
