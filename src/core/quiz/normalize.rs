//! Map loosely-typed model records onto [`Question`].
//!
//! Models drift between key names (`question` vs `Question`, `options` vs
//! `Answers`) and value types (`2` vs `"2"`). Each field is resolved by trying a
//! list of accessors in order; the first one that yields a value wins.

use serde_json::{Map, Value};

use super::markup;
use super::question::{Batch, DEFAULT_EXPLANATION, Question};

type Record = Map<String, Value>;
type Accessor<T> = fn(&Record) -> Option<T>;

const QUESTION_TEXT: &[Accessor<String>] = &[
    |r| text_at(r, "question"),
    |r| text_at(r, "Question"),
    |r| text_at(r, "questionText"),
    |r| text_at(r, "question_text"),
    |r| text_at(r, "text"),
    |r| text_at(r, "prompt"),
];

const OPTIONS: &[Accessor<Value>] = &[
    |r| r.get("options").cloned(),
    |r| r.get("Options").cloned(),
    |r| r.get("answers").cloned(),
    |r| r.get("Answers").cloned(),
    |r| r.get("choices").cloned(),
    |r| r.get("Choices").cloned(),
];

const CORRECT_INDEX: &[Accessor<i64>] = &[
    |r| r.get("correctIndex").and_then(index_from_number),
    |r| r.get("correctIndex").and_then(index_from_string),
    |r| r.get("correct_index").and_then(index_from_value),
    |r| r.get("CorrectIndex").and_then(index_from_value),
    |r| r.get("answerIndex").and_then(index_from_value),
    |r| r.get("correctAnswerIndex").and_then(index_from_value),
    |r| r.get("answer").and_then(index_from_value),
];

const EXPLANATION: &[Accessor<String>] = &[
    |r| text_at(r, "explanation"),
    |r| text_at(r, "Explanation"),
    |r| text_at(r, "rationale"),
    |r| text_at(r, "reason"),
];

fn first_present<T>(record: &Record, accessors: &[Accessor<T>]) -> Option<T> {
    accessors.iter().find_map(|accessor| accessor(record))
}

fn text_at(record: &Record, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn index_from_number(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_u64().map(|n| i64::try_from(n).unwrap_or(i64::MAX)))
        .or_else(|| value.as_f64().map(|f| f as i64))
}

/// Numeric strings parse; any other string counts as index 0.
fn index_from_string(value: &Value) -> Option<i64> {
    let s = value.as_str()?.trim();
    let parsed = s
        .parse::<i64>()
        .ok()
        .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f as i64));
    Some(parsed.unwrap_or(0))
}

fn index_from_value(value: &Value) -> Option<i64> {
    index_from_number(value).or_else(|| index_from_string(value))
}

fn option_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Object(map) => ["text", "label", "option"]
            .iter()
            .find_map(|k| map.get(*k).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        Value::Null => String::new(),
        Value::Array(_) => value.to_string(),
    }
}

/// Normalize one raw candidate. Returns `None` (and logs a warning) when the
/// record has no question text or fewer than two options.
pub fn normalize(raw: &Value, position: usize, batch: &Batch) -> Option<Question> {
    let Some(record) = raw.as_object() else {
        log::warn!("Skipping candidate {}: not a JSON object", position);
        return None;
    };
    let Some(text) = first_present(record, QUESTION_TEXT) else {
        log::warn!("Skipping candidate {}: no question text", position);
        return None;
    };
    let raw_options = match first_present(record, OPTIONS) {
        Some(Value::Array(items)) if items.len() >= 2 => items,
        Some(Value::Array(items)) => {
            log::warn!(
                "Skipping candidate {}: {} option(s), need at least 2",
                position,
                items.len()
            );
            return None;
        }
        _ => {
            log::warn!("Skipping candidate {}: options missing or not a list", position);
            return None;
        }
    };

    let text = markup::clean(&text);
    if text.is_empty() {
        log::warn!(
            "Skipping candidate {}: question text is empty after cleanup",
            position
        );
        return None;
    }
    let explanation = first_present(record, EXPLANATION)
        .map(|e| markup::clean(&e))
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| DEFAULT_EXPLANATION.to_string());
    let options: Vec<String> = raw_options
        .iter()
        .map(|o| markup::clean(&option_text(o)))
        .collect();

    let last = options.len() - 1;
    let resolved = first_present(record, CORRECT_INDEX).unwrap_or(0);
    let correct_index = usize::try_from(resolved).unwrap_or(0).min(last);
    if usize::try_from(resolved).ok() != Some(correct_index) {
        log::debug!(
            "Candidate {}: correct index {} clamped to {}",
            position,
            resolved,
            correct_index
        );
    }

    Some(Question {
        id: batch.question_id(position),
        text,
        options,
        correct_index,
        explanation,
    })
}

/// Normalize every candidate by position, drop rejections, keep at most `limit`.
pub fn normalize_all(candidates: &[Value], batch: &Batch, limit: usize) -> Vec<Question> {
    let questions: Vec<Question> = candidates
        .iter()
        .enumerate()
        .filter_map(|(position, raw)| normalize(raw, position, batch))
        .take(limit)
        .collect();
    if questions.len() < candidates.len().min(limit) {
        log::info!(
            "Kept {} of {} candidate question(s)",
            questions.len(),
            candidates.len()
        );
    }
    questions
}
